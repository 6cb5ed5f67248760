use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, RegistryBuilder, SolveError,
    Solver, SolverPlugin,
};

/// 2017 day 1: sum digits that match the next one, then the one halfway around
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2017, day = 1, tags = ["macro-test", "captcha"])]
pub struct InverseCaptcha;

impl AocParser for InverseCaptcha {
    type SharedData<'a> = Vec<u32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .chars()
            .map(|c| c.to_digit(10).ok_or_else(|| ParseError::InvalidFormat(c.to_string())))
            .collect()
    }
}

fn matching_sum(digits: &[u32], offset: usize) -> u32 {
    (0..digits.len())
        .filter(|&i| digits[i] == digits[(i + offset) % digits.len()])
        .map(|i| digits[i])
        .sum()
}

impl PartSolver<1> for InverseCaptcha {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(matching_sum(shared, 1).to_string())
    }
}

impl PartSolver<2> for InverseCaptcha {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(matching_sum(shared, shared.len() / 2).to_string())
    }
}

/// Single-part solver without tags
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2017, day = 25)]
pub struct OnePart;

impl AocParser for OnePart {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl PartSolver<1> for OnePart {
    fn solve(_shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok("merry christmas".to_string())
    }
}

#[test]
fn test_generated_solver_dispatch() {
    assert_eq!(InverseCaptcha::PARTS, 2);
    let mut digits = InverseCaptcha::parse("1122").unwrap();
    assert_eq!(InverseCaptcha::solve_part(&mut digits, 1).unwrap(), "3");
    let mut digits = InverseCaptcha::parse("123123").unwrap();
    assert_eq!(InverseCaptcha::solve_part(&mut digits, 2).unwrap(), "12");
    assert!(matches!(
        InverseCaptcha::solve_part(&mut digits, 3),
        Err(SolveError::PartOutOfRange(3))
    ));
}

#[test]
fn test_plugins_are_submitted() {
    let plugin = aoc_solver::inventory::iter::<SolverPlugin>()
        .find(|p| p.year == 2017 && p.day == 1)
        .expect("plugin for 2017 day 1");
    assert_eq!(plugin.tags, &["macro-test", "captcha"]);
    assert_eq!(plugin.solver.parts(), 2);

    let untagged = aoc_solver::inventory::iter::<SolverPlugin>()
        .find(|p| p.year == 2017 && p.day == 25)
        .expect("plugin for 2017 day 25");
    assert!(untagged.tags.is_empty());
    assert_eq!(untagged.solver.parts(), 1);
}

#[test]
fn test_registry_from_filtered_plugins() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|p| p.tags.contains(&"macro-test"))
        .unwrap()
        .build();
    assert_eq!(registry.len(), 1);

    let mut solver = registry.create_solver(2017, 1, "91212129").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "9");
}
