use ndarray::array;
use optbench_catalog::*;

mod common;

const NOT_READY: [&str; 5] = [
    "1.6 Gramacy & Lee (2012) Function",
    "1.9 Langermann Function",
    "3.4 Power Sum Function",
    "6.4 Forrester et al. (2008) Function",
    "6.7 Hartmann 4-D Function",
];

const CANONICAL_NAMES: [&str; 45] = [
    "1.1 Ackley Function",
    "1.2 Bukin Function N. 6",
    "1.3 Cross-in-Tray Function",
    "1.4 Drop-Wave Function",
    "1.5 Eggholder Function",
    "1.6 Gramacy & Lee (2012) Function",
    "1.7 Griewank Function",
    "1.8 Holder Table Function",
    "1.9 Langermann Function",
    "1.10 Levy Function",
    "1.11 Levy Function N. 13",
    "1.12 Rastrigin Function",
    "1.13 Schaffer Function N. 2",
    "1.14 Schaffer Function N. 4",
    "1.15 Schwefel Function",
    "1.16 Shubert Function",
    "2.1 Bohachevsky Functions",
    "2.2 Perm Function 0, d, β",
    "2.3 Rotated Hyper-Ellipsoid Function",
    "2.4 Sphere Function Modified",
    "2.5 Sum of Different Powers Function",
    "2.6 Sum Squares Function",
    "2.7 Trid Function",
    "3.1 Booth Function",
    "3.2 Matyas Function",
    "3.3 McCormick Function",
    "3.4 Power Sum Function",
    "3.5 Zakharov Function",
    "4.1 Three-Hump Camel Function",
    "4.2 Six-Hump Camel Function",
    "4.3 Dixon-Price Function",
    "4.4 Rosenbrock Function",
    "5.2 Easom Function",
    "5.3 Michalewicz Function",
    "6.1 Beale Function",
    "6.2 Branin Function",
    "6.3 Colville Function",
    "6.4 Forrester et al. (2008) Function",
    "6.5 Goldstein-Price Function",
    "6.6 Hartmann 3-D Function",
    "6.7 Hartmann 4-D Function",
    "6.8 Hartmann 6-D Function",
    "6.9 Perm Function d, β",
    "6.11 Shekel Function",
    "6.12 Styblinski-Tang Function",
];

#[test]
fn test_registered_names_match_catalog() {
    let names: Vec<&str> = list_functions().iter().map(|info| info.name).collect();
    assert_eq!(names, CANONICAL_NAMES.to_vec());

    for name in CANONICAL_NAMES {
        match get_problem(name) {
            Ok(problem) => assert_eq!(problem.name(), name),
            Err(e) => assert_eq!(e, CatalogError::UnimplementedProblem(name.to_string())),
        }
    }
}

#[test]
fn test_m_parameter_is_not_part_of_the_name() {
    assert_eq!(get_problem("5.3 Michalewicz Function").unwrap().dimensions(), 2);
    assert_eq!(get_problem("6.11 Shekel Function").unwrap().dimensions(), 4);
    assert!(matches!(
        get_problem("6.11 Shekel Function (m = 10)"),
        Err(CatalogError::UnknownProblem(_))
    ));
}

#[test]
fn test_rastrigin_default_lookup() {
    let problem = get_problem("1.12 Rastrigin Function").unwrap();
    assert_eq!(problem.dimensions(), DEFAULT_DIMENSIONS);
    assert_eq!(problem.lower_bound(), &array![-4.0, -4.0]);
    assert_eq!(problem.upper_bound(), &array![5.0, 5.0]);
    assert!(problem.constraints().is_none());

    let optimum = problem.global_optimum().unwrap();
    assert_eq!(optimum.locations, vec![array![0.0, 0.0]]);
    assert_eq!(optimum.value, 0.0);

    assert_eq!(problem.evaluate(&array![0.0, 0.0]).unwrap(), 0.0);
    // each component contributes 1 - 10 cos(2π) + 10 = 1
    let at_ones = problem.evaluate(&array![1.0, 1.0]).unwrap();
    assert!((at_ones - 2.0).abs() < 1e-12, "got {}", at_ones);
}

#[test]
fn test_unknown_name() {
    assert_eq!(
        get_problem("not a real function").unwrap_err(),
        CatalogError::UnknownProblem("not a real function".to_string())
    );
    // exact match only
    assert!(matches!(
        get_problem("1.12 rastrigin function"),
        Err(CatalogError::UnknownProblem(_))
    ));
    assert!(matches!(
        function_info("Rastrigin"),
        Err(CatalogError::UnknownProblem(_))
    ));
}

#[test]
fn test_not_ready_entries_are_rejected() {
    for name in NOT_READY {
        assert_eq!(
            get_problem(name).unwrap_err(),
            CatalogError::UnimplementedProblem(name.to_string()),
        );
        assert_eq!(is_implemented(name), Ok(false));
        assert!(!function_info(name).unwrap().implemented);
    }
    // status is checked before the dimensionality
    assert!(matches!(
        get_problem_with_dimensions("1.9 Langermann Function", 3),
        Err(CatalogError::UnimplementedProblem(_))
    ));
}

#[test]
fn test_dimension_mismatch_on_evaluate() {
    let problem = get_problem_with_dimensions("1.1 Ackley Function", 2).unwrap();
    assert_eq!(
        problem.evaluate(&array![0.0, 0.0, 0.0]).unwrap_err(),
        CatalogError::DimensionMismatch {
            expected: 2,
            actual: 3
        }
    );
    assert_eq!(
        problem.evaluate_slice(&[]).unwrap_err(),
        CatalogError::DimensionMismatch {
            expected: 2,
            actual: 0
        }
    );
}

#[test]
fn test_dimension_requests() {
    let hartmann = get_problem_with_dimensions("6.8 Hartmann 6-D Function", 6).unwrap();
    assert_eq!(hartmann.dimensions(), 6);

    assert_eq!(
        get_problem_with_dimensions("6.8 Hartmann 6-D Function", 3).unwrap_err(),
        CatalogError::FixedDimension {
            name: "6.8 Hartmann 6-D Function".to_string(),
            intrinsic: 6,
            requested: 3,
        }
    );
    assert_eq!(
        get_problem_with_dimensions("4.4 Rosenbrock Function", 0).unwrap_err(),
        CatalogError::ZeroDimension("4.4 Rosenbrock Function".to_string())
    );

    let rosenbrock = get_problem_with_dimensions("4.4 Rosenbrock Function", 7).unwrap();
    assert_eq!(rosenbrock.lower_bound().len(), 7);
    assert_eq!(rosenbrock.global_optimum().unwrap().locations[0].len(), 7);
}

#[test]
fn test_fixed_dimension_defaults() {
    for (name, dims) in [
        ("2.4 Sphere Function Modified", 6),
        ("6.3 Colville Function", 4),
        ("6.6 Hartmann 3-D Function", 3),
        ("6.11 Shekel Function", 4),
        ("1.2 Bukin Function N. 6", 2),
    ] {
        let problem = get_problem(name).unwrap();
        assert_eq!(problem.dimensions(), dims, "{}", name);
        assert_eq!(problem.dimensionality(), Dimensionality::Fixed(dims));
    }
}

#[test]
fn test_listing() {
    let all = list_functions();
    assert_eq!(all.len(), 45);
    assert_eq!(all[0].name, "1.1 Ackley Function");
    assert_eq!(all[44].name, "6.12 Styblinski-Tang Function");

    let not_ready: Vec<&str> = all.iter().filter(|i| !i.implemented).map(|i| i.name).collect();
    assert_eq!(not_ready, NOT_READY.to_vec());

    for info in &all {
        assert_eq!(is_implemented(info.name), Ok(info.implemented));
        assert_eq!(function_info(info.name).as_ref(), Ok(info));
    }
}

#[test]
fn test_categories_follow_sections() {
    for info in list_functions() {
        let expected = match info.name.split('.').next() {
            Some("1") => Category::ManyLocalMinima,
            Some("2") => Category::BowlShaped,
            Some("3") => Category::PlateShaped,
            Some("4") => Category::ValleyShaped,
            Some("5") => Category::SteepRidgesDrops,
            _ => Category::Other,
        };
        assert_eq!(info.category, expected, "{}", info.name);
    }
}

#[test]
fn test_function_info_serializes() {
    let info = function_info("6.6 Hartmann 3-D Function").unwrap();
    let value = serde_json::to_value(&info).unwrap();
    assert_eq!(value["name"], "6.6 Hartmann 3-D Function");
    assert_eq!(value["category"], "other");
    assert_eq!(value["dimensionality"]["fixed"], 3);
    assert_eq!(value["implemented"], true);
    assert!(value["references"].as_array().unwrap().len() >= 1);
    assert_eq!(value["global_optimum"]["value"], -3.86278);
    assert_eq!(value["global_optimum"]["locations"].as_array().unwrap().len(), 1);
}

#[test]
fn test_function_info_carries_default_optimum() {
    let branin = function_info("6.2 Branin Function").unwrap();
    let optimum = branin.global_optimum.as_ref().unwrap();
    assert_eq!(optimum.locations.len(), 3);
    assert_eq!(optimum.value, 0.397887);

    // parametric entries report the optimum at the default dimensionality
    let ackley = function_info("1.1 Ackley Function").unwrap();
    let expected = get_problem("1.1 Ackley Function").unwrap();
    assert_eq!(ackley.global_optimum.as_ref(), expected.global_optimum());
    assert_eq!(ackley.global_optimum.unwrap().locations[0].len(), DEFAULT_DIMENSIONS);

    assert!(function_info("6.7 Hartmann 4-D Function").unwrap().global_optimum.is_none());
    let json = serde_json::to_value(function_info("1.9 Langermann Function").unwrap()).unwrap();
    assert!(json["global_optimum"].is_null());
}

#[test]
fn test_problem_can_be_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Problem>();

    let problem = get_problem("4.4 Rosenbrock Function").unwrap();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let problem = problem.clone();
            std::thread::spawn(move || problem.evaluate_slice(&[i as f64, 1.0]).unwrap())
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap() >= 0.0);
    }
}
