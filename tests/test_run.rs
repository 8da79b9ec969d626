use freightga::{
    catalog::{Catalog, Item},
    error::GeneticError,
    evolution::{run, EvolutionOptions, OptimizerBuilder, INFEASIBLE_FITNESS},
    rng::RandomNumberGenerator,
};

fn three_items() -> Catalog {
    Catalog::new(vec![
        Item::new("item0", 1.0, 10.0, 1),
        Item::new("item1", 2.0, 15.0, 1),
        Item::new("item2", 3.0, 40.0, 1),
    ])
    .unwrap()
}

fn appliances() -> Vec<Item> {
    vec![
        Item::new("Smart Fridge LG", 0.720, 1050.00, 2),
        Item::new("Samsung Galaxy S21", 0.000095, 3200.00, 3),
        Item::new("Smart TV 60'' Philips", 0.410, 4700.00, 1),
        Item::new("Smart TV 48'' Sony", 0.280, 3800.00, 2),
        Item::new("Smart TV 40'' TCL", 0.190, 2500.00, 1),
        Item::new("Notebook HP", 0.00380, 2700.00, 3),
        Item::new("Fan Arno Turbo", 0.480, 210.00, 2),
        Item::new("Microwave Brastemp", 0.0450, 350.00, 1),
        Item::new("Microwave Samsung", 0.0500, 410.00, 2),
        Item::new("Microwave Midea", 0.0300, 280.00, 1),
        Item::new("Fridge Electrolux", 0.600, 900.00, 1),
        Item::new("Fridge Consul Frost", 0.800, 1300.00, 3),
        Item::new("Notebook Acer", 0.500, 2100.00, 1),
        Item::new("Notebook Apple MacBook Air", 0.520, 5200.00, 2),
        Item::new("Tablet Samsung Tab S7", 0.000050, 1800.00, 1),
        Item::new("Air Conditioner LG", 0.650, 2200.00, 2),
        Item::new("Washing Machine Panasonic", 0.900, 1800.00, 1),
        Item::new("Dryer Electrolux", 0.700, 1500.00, 3),
        Item::new("Bluetooth Speaker JBL", 0.000030, 600.00, 2),
        Item::new("Coffee Maker Nespresso", 0.0200, 450.00, 1),
    ]
}

fn options(population_size: usize, num_generations: usize, mutation_rate: f64) -> EvolutionOptions {
    EvolutionOptions::builder()
        .population_size(population_size)
        .num_generations(num_generations)
        .mutation_rate(mutation_rate)
        .build()
}

#[test]
fn test_three_items_converge() {
    let catalog = three_items();
    let options = options(50, 50, 0.05);

    let hits = (0..100u64)
        .filter(|&seed| {
            let mut rng = RandomNumberGenerator::from_seed(seed);
            let result = run(&catalog, 4.0, &options, &mut rng).unwrap();
            result.manifest(&catalog).unwrap().total_value >= 45.0
        })
        .count();

    assert!(hits >= 95, "only {} of 100 runs converged", hits);
}

#[test]
fn test_three_items_optimum_fills_capacity_exactly() {
    let catalog = three_items();
    let mut rng = RandomNumberGenerator::from_seed(42);

    let result = run(&catalog, 4.0, &options(50, 50, 0.05), &mut rng).unwrap();
    let manifest = result.manifest(&catalog).unwrap();

    assert_eq!(manifest.total_value, 50.0);
    assert_eq!(manifest.total_space, 4.0);
    let names: Vec<&str> = manifest.selected.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["item0", "item2"]);
    assert_eq!(result.best().selection(), &[true, false, true]);
}

#[test]
fn test_zero_capacity_takes_nothing() {
    let catalog = three_items();
    let mut rng = RandomNumberGenerator::from_seed(7);

    let result = run(&catalog, 0.0, &options(30, 20, 0.05), &mut rng).unwrap();
    let manifest = result.manifest(&catalog).unwrap();

    assert!(manifest.is_empty());
    assert_eq!(manifest.total_value, 0.0);
    assert_eq!(manifest.total_space, 0.0);
    if let Some(feasible) = result.best_feasible() {
        assert!(feasible.selection().iter().all(|&taken| !taken));
    }
    // Any load with a lot in it is penalized.
    assert!(result.best().fitness() <= INFEASIBLE_FITNESS);
}

#[test]
fn test_zero_capacity_with_many_items() {
    let catalog = Catalog::new(appliances()).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(13);

    let result = run(&catalog, 0.0, &options(20, 10, 0.01), &mut rng).unwrap();
    let manifest = result.manifest(&catalog).unwrap();

    assert_eq!(manifest.total_value, 0.0);
    assert!(manifest.is_empty());
}

#[test]
fn test_single_item_is_selected() {
    let catalog = Catalog::new(vec![Item::new("only", 1.0, 5.0, 1)]).unwrap();

    for seed in 0..10 {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let result = run(&catalog, 1.0, &options(20, 20, 0.01), &mut rng).unwrap();
        let manifest = result.manifest(&catalog).unwrap();

        assert_eq!(manifest.total_value, 5.0);
        assert_eq!(manifest.total_space, 1.0);
        assert_eq!(result.best().selection(), &[true]);
    }
}

#[test]
fn test_same_seed_same_result() {
    let catalog = Catalog::new(appliances()).unwrap();
    let options = options(60, 40, 0.02);

    let mut first_rng = RandomNumberGenerator::from_seed(2024);
    let mut second_rng = RandomNumberGenerator::from_seed(2024);
    let first = run(&catalog, 3.0, &options, &mut first_rng).unwrap();
    let second = run(&catalog, 3.0, &options, &mut second_rng).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.best_fitness_trace(), second.best_fitness_trace());
}

#[test]
fn test_result_respects_capacity() {
    let catalog = Catalog::new(appliances()).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(99);

    let result = run(&catalog, 3.0, &options(100, 60, 0.01), &mut rng).unwrap();
    let manifest = result.manifest(&catalog).unwrap();

    assert!(manifest.total_space <= 3.0);
    assert!(manifest.total_value > 0.0);
    assert_eq!(manifest.total_value, result.best().total_value());
    assert!(result.best().is_feasible());
}

#[test]
fn test_best_ever_trace_is_non_decreasing() {
    let catalog = Catalog::new(appliances()).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(5);

    let result = run(&catalog, 2.0, &options(31, 40, 0.05), &mut rng).unwrap();
    let trace = result.best_ever_trace();

    assert_eq!(trace.len(), 41);
    assert!(trace.windows(2).all(|pair| pair[1] >= pair[0]));
    assert_eq!(*trace.last().unwrap(), result.best().fitness());
}

#[test]
fn test_optimizer_matches_run() {
    let options = options(40, 30, 0.02);
    let optimizer = OptimizerBuilder::new()
        .with_items(appliances())
        .with_capacity(3.0)
        .with_options(options.clone())
        .build()
        .unwrap();

    let manifest = optimizer
        .optimize(&mut RandomNumberGenerator::from_seed(8))
        .unwrap();
    let direct = run(
        optimizer.catalog(),
        3.0,
        &options,
        &mut RandomNumberGenerator::from_seed(8),
    )
    .unwrap()
    .manifest(optimizer.catalog())
    .unwrap();

    assert_eq!(manifest, direct);
}

#[test]
fn test_invalid_catalog() {
    let result = Catalog::new(vec![Item::new("broken", 1.0, 1.0, 0)]);
    assert!(matches!(result, Err(GeneticError::Validation(_))));
}

#[test]
fn test_overflowing_values_are_rejected_before_running() {
    let result = OptimizerBuilder::new()
        .with_items(vec![
            Item::new("huge", 1.0, f64::MAX, 2),
            Item::new("huge", 1.0, f64::MAX, 2),
        ])
        .with_capacity(10.0)
        .build();

    assert!(matches!(result, Err(GeneticError::Validation(_))));
}
