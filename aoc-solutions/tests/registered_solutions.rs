// links the solution plugins into this test binary
use aoc_solutions as _;
use aoc_solver::{RegistryBuilder, SolveError, SolverError, SolverRegistry};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn registry() -> SolverRegistry {
    RegistryBuilder::new()
        .register_all_plugins()
        .expect("plugins register without duplicates")
        .build()
}

fn answers(registry: &SolverRegistry, year: u16, day: u8, input: &str) -> Vec<String> {
    let mut solver = registry.create_solver(year, day, input).unwrap();
    solver
        .solve_all()
        .into_iter()
        .map(|result| result.unwrap().answer)
        .collect()
}

#[test]
fn test_every_solution_is_registered() {
    init_logger();
    let registry = registry();
    let registered: Vec<(u16, u8)> = registry.puzzles().map(|p| (p.year, p.day)).collect();
    assert_eq!(
        registered,
        vec![
            (2015, 20),
            (2021, 22),
            (2022, 8),
            (2022, 12),
            (2022, 15),
            (2022, 18),
            (2022, 25),
        ]
    );
    let parts: Vec<u8> = registry.puzzles().map(|p| p.parts).collect();
    assert_eq!(parts, vec![2, 2, 2, 2, 2, 2, 1]);
}

#[test]
fn test_examples_through_registry() {
    init_logger();
    let registry = registry();

    assert_eq!(answers(&registry, 2015, 20, "150"), vec!["8", "8"]);
    assert_eq!(
        answers(
            &registry,
            2021,
            22,
            "on x=10..12,y=10..12,z=10..12\non x=11..13,y=11..13,z=11..13\n\
             off x=9..11,y=9..11,z=9..11\non x=10..10,y=10..10,z=10..10\n"
        ),
        vec!["39", "39"]
    );
    assert_eq!(
        answers(&registry, 2022, 8, "30373\n25512\n65332\n33549\n35390\n"),
        vec!["21", "8"]
    );
    assert_eq!(
        answers(
            &registry,
            2022,
            12,
            "Sabqponm\nabcryxxl\naccszExk\nacctuvwj\nabdefghi\n"
        ),
        vec!["31", "29"]
    );
    assert_eq!(
        answers(
            &registry,
            2022,
            18,
            "2,2,2\n1,2,2\n3,2,2\n2,1,2\n2,3,2\n2,2,1\n2,2,3\n2,2,4\n2,2,6\n1,2,5\n3,2,5\n2,1,5\n2,3,5\n"
        ),
        vec!["64", "58"]
    );
    assert_eq!(
        answers(&registry, 2022, 25, "1=-0-2\n12111\n2=0=\n21\n2=01\n111\n20012\n112\n1=-1=\n1-12\n12\n1=\n122\n"),
        vec!["2=-1=0"]
    );
}

#[test]
fn test_filter_by_tag() {
    let voxels = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"voxel"))
        .unwrap()
        .build();
    assert_eq!(voxels.len(), 1);
    assert!(voxels.contains(2022, 18));

    let searches = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2022 && plugin.tags.contains(&"grid"))
        .unwrap()
        .build();
    assert_eq!(searches.len(), 2);
}

#[test]
fn test_errors_surface_through_registry() {
    let registry = registry();
    assert!(matches!(
        registry.create_solver(2022, 18, "1,2"),
        Err(SolverError::ParseError(_))
    ));
    assert!(matches!(
        registry.create_solver(2016, 1, ""),
        Err(SolverError::NotFound(2016, 1))
    ));

    let mut solver = registry.create_solver(2022, 25, "1=").unwrap();
    assert!(matches!(solver.solve(2), Err(SolveError::PartOutOfRange(2))));

    let mut unreachable = registry.create_solver(2022, 12, "SazE").unwrap();
    assert!(matches!(unreachable.solve(1), Err(SolveError::SolveFailed(_))));
}
