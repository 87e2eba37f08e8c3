//! CPLEX LP formulation of the MIS integer program

use std::fmt;

use crate::graph::instance::Instance;
use crate::io::configuration::LP_TERMS_PER_LINE;

/// Binary program `max Σ x_i` s.t. `x_a + x_b <= 1` per edge
struct LpProgram<'a>(&'a Instance);

impl LpProgram<'_> {
    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let instance = self.0;
        let params = instance.params();
        writeln!(f, "\\ {}", instance.description())?;
        writeln!(f, "\\ format: CPLEX lp")?;
        writeln!(f, "\\ {} v{}", env!("CARGO_PKG_NAME"), params.version)?;
        writeln!(f, "\\ name={}", instance.name())?;
        writeln!(f, "\\\\ params:")?;
        writeln!(f, "\\\\ L={}", params.side)?;
        writeln!(f, "\\\\ density={:?}", params.density)?;
        writeln!(f, "\\\\ seed={}", params.seed)?;
        writeln!(f, "\\\\ r={:?}", params.radius)
    }

    fn write_objective(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\nMaximize\n  obj:")?;
        let count = self.0.node_count();
        for i in 0..count {
            write!(f, " x{i}")?;
            if i + 1 < count {
                write!(f, " +")?;
                if i % LP_TERMS_PER_LINE == LP_TERMS_PER_LINE - 1 {
                    write!(f, "\n      ")?;
                }
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for LpProgram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)?;
        self.write_objective(f)?;

        write!(f, "\nSubject To\n")?;
        for (j, (a, b)) in self.0.edges().iter().enumerate() {
            writeln!(f, "  e{j}: x{a} + x{b} <= 1")?;
        }

        write!(f, "\nBinary\n")?;
        for (position, id) in self.0.nodes().keys().enumerate() {
            if position > 0 {
                writeln!(f)?;
            }
            write!(f, "  x{id}")?;
        }
        write!(f, "\nEnd\n")
    }
}

/// Render the binary program `max Σ x_i` s.t. `x_a + x_b <= 1` per edge
pub fn to_lp(instance: &Instance) -> String {
    LpProgram(instance).to_string()
}
