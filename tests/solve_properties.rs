use float_eq::assert_float_eq;
use production_planner::{OptimizationParameters, SolveStatus, solve};

fn params(profit_a: f64, profit_b: f64, hours: f64, material: f64) -> OptimizationParameters {
    OptimizationParameters::new(profit_a, profit_b, hours, material)
}

fn feasible(p: &OptimizationParameters, a: u64, b: u64) -> bool {
    2. * a as f64 + 4. * b as f64 <= p.hours_available
        && 3. * a as f64 + 2. * b as f64 <= p.material_available
}

// Every feasible point has a <= hours / 2, b <= hours / 4.
fn brute_force_best(p: &OptimizationParameters) -> f64 {
    let max_a = (p.hours_available / 2.).floor() as u64;
    let max_b = (p.hours_available / 4.).floor() as u64;
    let mut best = 0.;
    for a in 0..=max_a {
        for b in 0..=max_b {
            if feasible(p, a, b) {
                best = f64::max(best, p.profit_a * a as f64 + p.profit_b * b as f64);
            }
        }
    }
    best
}

fn assert_optimal_plan(p: &OptimizationParameters) {
    let result = solve(p).unwrap();
    assert_eq!(result.status, SolveStatus::Optimal, "{p:?}");
    let plan = result.plan().unwrap();

    assert!(feasible(p, plan.qty_a, plan.qty_b), "{p:?} -> {plan:?}");
    assert_float_eq!(
        plan.profit,
        p.profit_a * plan.qty_a as f64 + p.profit_b * plan.qty_b as f64,
        abs <= 1e-6
    );
    assert_float_eq!(plan.profit, brute_force_best(p), abs <= 1e-6);
}

#[test]
fn default_form_values() {
    let p = params(30., 40., 100., 200.);
    assert_optimal_plan(&p);
    assert!(solve(&p).unwrap().plan().unwrap().profit >= 0.);
}

#[test]
fn documented_example() {
    let p = params(30., 50., 40., 60.);
    assert_optimal_plan(&p);
    let plan = solve(&p).unwrap().plan.unwrap();
    assert_eq!((plan.qty_a, plan.qty_b), (20, 0));
    assert_float_eq!(plan.profit, 600., abs <= 1e-6);
}

#[test]
fn matches_brute_force_on_small_grid() {
    let cases = [
        (30., 40., 100., 200.),
        (10., 90., 37., 25.),
        (45., 5., 60., 31.),
        (1., 1., 7., 7.),
        (12.5, 17.25, 53., 41.),
        (70., 100., 80., 80.),
        (3., 8., 29., 100.),
    ];
    for (pa, pb, h, m) in cases {
        assert_optimal_plan(&params(pa, pb, h, m));
    }
}

#[test]
fn zero_capacity_forces_empty_plan() {
    for p in [params(30., 40., 0., 200.), params(30., 40., 100., 0.)] {
        let result = solve(&p).unwrap();
        assert_eq!(result.status, SolveStatus::Optimal);
        let plan = result.plan().unwrap();
        assert_eq!((plan.qty_a, plan.qty_b), (0, 0));
        assert_float_eq!(plan.profit, 0., abs <= 1e-9);
    }
}

#[test]
fn tiny_capacities_only_allow_origin() {
    let result = solve(&params(30., 40., 1., 1.)).unwrap();
    assert_eq!(result.status, SolveStatus::Optimal);
    let plan = result.plan().unwrap();
    assert_eq!((plan.qty_a, plan.qty_b), (0, 0));
    assert_float_eq!(plan.profit, 0., abs <= 1e-9);
}

#[test]
fn negative_capacity_is_infeasible() {
    let result = solve(&params(30., 40., -1., 200.)).unwrap();
    assert_eq!(result.status, SolveStatus::Infeasible);
    assert!(result.plan().is_none());
}

#[test]
fn repeated_solves_agree() {
    let p = params(30., 50., 40., 60.);
    assert_eq!(solve(&p).unwrap(), solve(&p).unwrap());
}
