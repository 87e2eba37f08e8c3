//! Tests for argument parsing and the generate and solve commands

#[cfg(test)]
mod tests {
    use clap::Parser;
    use mislattice::MisError;
    use mislattice::io::cli::{
        Cli, Command, ErdosRenyiArgs, GenerateArgs, OutputFormat, RewireArgs, SolveArgs,
        format_solution, run_erdos_renyi, run_generate, run_rewire, run_solve,
    };
    use mislattice::io::progress::ProgressManager;
    use mislattice::solver::Solution;
    use num_bigint::BigUint;
    use std::f64::consts::SQRT_2;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    fn generate_args(folder: &Path) -> GenerateArgs {
        GenerateArgs {
            side: 5,
            density: 0.8,
            seed: Some(7),
            radius: SQRT_2,
            folder: folder.join("L{L}").to_string_lossy().into_owned(),
            all: false,
            json: false,
            metis: false,
            svg: false,
            cplex: false,
            png: false,
            edgelist: false,
            matrix: false,
            dry: false,
            verbose: false,
        }
    }

    fn bowtie_document() -> &'static str {
        r#"{"problem":{"type":"mis","meta":{"params":{"L":2}},"edges":[{"ids":[0,1]},{"ids":[0,2]},{"ids":[1,2]},{"ids":[2,3]},{"ids":[2,4]},{"ids":[3,4]}]}}"#
    }

    // Tests parsing of generate flags and defaults
    // Verified by short flags for side, seed and formats
    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from(["mislattice", "generate", "-L", "8", "-s", "3", "-j", "-m"])
            .unwrap();
        assert!(cli.should_show_progress());
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.side, 8);
        assert_eq!(args.seed, Some(3));
        assert!((args.density - 0.8).abs() < f64::EPSILON);
        assert!((args.radius - SQRT_2).abs() < f64::EPSILON);
        assert_eq!(
            args.selected_formats(),
            vec![OutputFormat::Metis, OutputFormat::Json]
        );
    }

    // Tests parsing of solve with the global quiet flag
    // Verified by placing quiet after the subcommand
    #[test]
    fn test_parse_solve() {
        let cli = Cli::try_parse_from(["mislattice", "solve", "a.json", "-w", "4", "-q"]).unwrap();
        assert!(!cli.should_show_progress());
        let Command::Solve(args) = cli.command else {
            panic!("expected solve");
        };
        assert_eq!(args.instance, PathBuf::from("a.json"));
        assert_eq!(args.window, Some(4));

        assert!(Cli::try_parse_from(["mislattice", "generate"]).is_err());
    }

    // Tests format selection rules
    // Verified by no flags, one flag and the all flag
    #[test]
    fn test_selected_formats() {
        let dir = tempdir().unwrap();
        let mut args = generate_args(dir.path());
        assert_eq!(args.selected_formats(), OutputFormat::ALL.to_vec());

        args.png = true;
        assert_eq!(args.selected_formats(), vec![OutputFormat::Png]);

        args.all = true;
        assert_eq!(args.selected_formats().len(), 7);
    }

    // Tests placeholder substitution in the output folder
    // Verified by a template using every placeholder
    #[test]
    fn test_output_folder() {
        let mut args = generate_args(Path::new("."));
        args.folder = "out/L{L}_d{d}_s{s}_r{r}".to_string();
        assert_eq!(
            args.output_folder(3, 1.415),
            PathBuf::from("out/L5_d0.8_s3_r1.415")
        );
    }

    // Tests that generate writes every format under the instance name
    // Verified by listing the output folder
    #[test]
    fn test_run_generate_writes_all_formats() {
        let dir = tempdir().unwrap();
        let args = generate_args(dir.path());
        let mut progress = ProgressManager::new(false);
        let outcome = run_generate(&args, &mut progress).unwrap();

        assert_eq!(outcome.generated.instance.node_count(), 20);
        assert_eq!(outcome.generated.instance.params().seed, 7);
        assert!(outcome.ascii.is_none());
        assert_eq!(outcome.written.len(), 7);

        let name = outcome.generated.instance.name();
        assert_eq!(name, "N20_d0.8_s7_r1.415");
        for extension in [
            "svg",
            "lp",
            "txt",
            "json",
            "png",
            "edgelist",
            "matrix.json",
        ] {
            let path = dir.path().join("L5").join(format!("{name}.{extension}"));
            assert!(path.exists(), "missing {}", path.display());
        }
    }

    // Tests that a dry run renders ASCII and writes nothing
    // Verified by checking the folder afterwards
    #[test]
    fn test_run_generate_dry() {
        let dir = tempdir().unwrap();
        let mut args = generate_args(dir.path());
        args.dry = true;
        let outcome = run_generate(&args, &mut ProgressManager::new(false)).unwrap();

        assert!(outcome.written.is_empty());
        let ascii = outcome.ascii.unwrap();
        assert_eq!(ascii.matches('o').count(), 20);
        assert!(!dir.path().join("L5").exists());
    }

    // Tests that invalid generate parameters fail before writing
    // Verified by an oversized lattice
    #[test]
    fn test_run_generate_invalid() {
        let dir = tempdir().unwrap();
        let mut args = generate_args(dir.path());
        args.side = 60;
        assert!(matches!(
            run_generate(&args, &mut ProgressManager::new(false)),
            Err(MisError::InvalidParameter { .. })
        ));
    }

    // Tests solving a JSON file with the default window
    // Verified by the bowtie optimum
    #[test]
    fn test_run_solve() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bowtie.json");
        fs::write(&path, bowtie_document()).unwrap();

        let args = SolveArgs {
            instance: path,
            window: None,
        };
        let solution = run_solve(&args, &mut ProgressManager::new(false)).unwrap();
        assert_eq!(solution.best_score, 2);
        assert_eq!(solution.degeneracy, BigUint::from(4u8));
        assert_eq!(solution.first_excited, BigUint::from(5u8));
    }

    // Tests solving the JSON written by generate
    // Verified by checking every sample is independent
    #[test]
    fn test_generate_then_solve() {
        let dir = tempdir().unwrap();
        let mut args = generate_args(dir.path());
        args.json = true;
        let outcome = run_generate(&args, &mut ProgressManager::new(false)).unwrap();

        let solve = SolveArgs {
            instance: outcome.written[0].clone(),
            window: None,
        };
        let solution = run_solve(&solve, &mut ProgressManager::new(false)).unwrap();
        assert!(solution.best_score >= 5);
        assert!(solution.degeneracy >= BigUint::from(1u8));

        let edges = outcome.generated.instance.edges();
        for sample in &solution.samples {
            assert_eq!(sample.len(), solution.best_score);
            for (i, &a) in sample.iter().enumerate() {
                for &b in &sample[i + 1..] {
                    assert!(!edges.contains(&(a, b)));
                }
            }
        }
    }

    // Tests that the METIS file of a generated instance solves like its JSON file
    // Verified by comparing both reports field by field
    #[test]
    fn test_solve_metis_matches_json() {
        let dir = tempdir().unwrap();
        let mut args = generate_args(dir.path());
        args.json = true;
        args.metis = true;
        let outcome = run_generate(&args, &mut ProgressManager::new(false)).unwrap();
        let metis_path = outcome
            .written
            .iter()
            .find(|path| path.extension().is_some_and(|ext| ext == "txt"))
            .unwrap();
        let json_path = outcome
            .written
            .iter()
            .find(|path| path.extension().is_some_and(|ext| ext == "json"))
            .unwrap();

        let solve = |instance: &PathBuf| {
            let args = SolveArgs {
                instance: instance.clone(),
                window: None,
            };
            run_solve(&args, &mut ProgressManager::new(false)).unwrap()
        };
        assert_eq!(solve(metis_path), solve(json_path));
    }

    // Tests solve input checks
    // Verified by a wrong extension, a missing file, a malformed METIS file and
    // a too-small window
    #[test]
    fn test_run_solve_errors() {
        let dir = tempdir().unwrap();
        let mut progress = ProgressManager::new(false);

        let wrong = SolveArgs {
            instance: dir.path().join("bowtie.lp"),
            window: None,
        };
        assert!(matches!(
            run_solve(&wrong, &mut progress),
            Err(MisError::InvalidParameter { .. })
        ));

        let missing = SolveArgs {
            instance: dir.path().join("missing.json"),
            window: None,
        };
        assert!(matches!(
            run_solve(&missing, &mut progress),
            Err(MisError::FileSystem { .. })
        ));

        let weighted = dir.path().join("weighted.txt");
        fs::write(&weighted, "2 1 1\n2\n1\n").unwrap();
        let weighted = SolveArgs {
            instance: weighted,
            window: None,
        };
        assert!(matches!(
            run_solve(&weighted, &mut progress),
            Err(MisError::InvalidSourceData { .. })
        ));

        let path = dir.path().join("bowtie.json");
        fs::write(&path, bowtie_document()).unwrap();
        let narrow = SolveArgs {
            instance: path,
            window: Some(1),
        };
        assert!(matches!(
            run_solve(&narrow, &mut progress),
            Err(MisError::WindowViolation { .. })
        ));
    }

    // Tests the report layout
    // Verified by a degeneracy below and above the sample cap
    #[test]
    fn test_format_solution() {
        let solution = Solution {
            best_score: 2,
            degeneracy: BigUint::from(4u8),
            first_excited: BigUint::from(5u8),
            samples: vec![vec![0, 4], vec![1, 3]],
        };
        assert_eq!(
            format_solution(Path::new("bowtie.json"), &solution),
            "file: bowtie.json\n|mis|=2\ndegeneracy=4\nfirst excited=5\n\nsolutions:\n[0, 4]\n[1, 3]\n\nNOTE: Node indices are 0-indexed!\n"
        );

        let crowded = Solution {
            best_score: 3,
            degeneracy: BigUint::from(8u8),
            first_excited: BigUint::from(12u8),
            samples: vec![vec![0, 2, 4]],
        };
        assert!(format_solution(Path::new("x.json"), &crowded).contains("\nfirst 5 solutions:\n"));
    }

    // Tests parsing of the rewire and erdos-renyi subcommands
    // Verified by their defaults
    #[test]
    fn test_parse_graph_variants() {
        let cli = Cli::try_parse_from(["mislattice", "rewire", "-L", "21", "-s", "4"]).unwrap();
        let Command::Rewire(args) = cli.command else {
            panic!("expected rewire");
        };
        assert_eq!(args.steps, 20);
        assert_eq!(args.seed, Some(4));
        assert_eq!(args.folder, "instances/L{L}/rewired");

        let cli = Cli::try_parse_from(["mislattice", "erdos-renyi", "-L", "10"]).unwrap();
        let Command::ErdosRenyi(args) = cli.command else {
            panic!("expected erdos-renyi");
        };
        assert_eq!(args.seed, 0);
        assert_eq!(args.folder, "instances/L{L}/ER");
    }

    // Tests that rewire writes one LP file per round
    // Verified by the numbered file names
    #[test]
    fn test_run_rewire() {
        let dir = tempdir().unwrap();
        let args = RewireArgs {
            side: 5,
            density: 0.8,
            seed: Some(7),
            radius: SQRT_2,
            steps: 4,
            folder: dir.path().join("L{L}").to_string_lossy().into_owned(),
        };
        let written = run_rewire(&args, &mut ProgressManager::new(false)).unwrap();

        assert_eq!(written.len(), 4);
        for (round, path) in written.iter().enumerate() {
            assert_eq!(
                path,
                &dir.path()
                    .join("L5")
                    .join(format!("N20_d0.8_s7_r1.415_rewired{round}.lp"))
            );
            assert!(fs::read_to_string(path).unwrap().contains("Subject To"));
        }
    }

    // Tests that erdos-renyi writes a single LP file
    // Verified by the file name and its objective
    #[test]
    fn test_run_erdos_renyi() {
        let dir = tempdir().unwrap();
        let args = ErdosRenyiArgs {
            side: 5,
            density: 0.8,
            seed: 3,
            folder: dir.path().join("L{L}").to_string_lossy().into_owned(),
        };
        let path = run_erdos_renyi(&args).unwrap();

        assert_eq!(path, dir.path().join("L5").join("N20_d0.8_s3_r1.415.lp"));
        let lp = fs::read_to_string(path).unwrap();
        assert!(lp.contains("x19"));
    }
}
