use assert_float_eq::assert_float_absolute_eq;

use gizi_calc::calculator::{
    evaluate_meal_tolerance, evaluate_tolerance, scale_serving, MealOccasion, Nutrient,
    NeedsCalculator, ToleranceStatus,
};
use gizi_calc::error::NutriError;
use gizi_calc::menu::MenuSession;
use gizi_calc::reference::DEFAULT_REFERENCE;

#[test]
fn test_scale_serving_identity_and_half() {
    let standard = DEFAULT_REFERENCE.require_category("carbohydrate").unwrap().standard;

    let same = scale_serving(100.0, 100.0, &standard.nutrients);
    assert_eq!(same, standard.nutrients);

    let half = standard.serving(50.0);
    assert_eq!(half.energy, 88.0); // 87.5 rounds up
    assert_eq!(half.protein, 2.0);
    assert_eq!(half.carbohydrate, 20.0);
}

#[test]
fn test_serving_of_catalog_food() {
    let standard = DEFAULT_REFERENCE.require_category("animalProtein").unwrap().standard;
    let chicken = DEFAULT_REFERENCE.find_food("animalProtein", "daging ayam").unwrap();
    let serving = standard.serving(chicken.weight);

    assert_eq!(chicken.weight, 40.0);
    assert_eq!(serving.energy, 50.0);
    assert_float_absolute_eq!(serving.protein, 7.0, 1e-9);
    assert_float_absolute_eq!(serving.fat, 2.0, 1e-9);
}

#[test]
fn test_menu_total_is_sum_of_entries() {
    let mut menu = MenuSession::with_name(&DEFAULT_REFERENCE, "Sarapan");
    menu.add_entry("carbohydrate", "Nasi Beras Giling putih", 150.0)
        .unwrap();
    menu.add_entry("plantProtein", "Tahu", 100.0).unwrap();

    let total = menu.total_nutrition();
    assert_eq!(total.energy, 263.0 + 160.0);
    assert_float_absolute_eq!(total.protein, 18.0, 1e-9);
    assert_float_absolute_eq!(total.fat, 6.0, 1e-9);
    assert_float_absolute_eq!(total.carbohydrate, 76.0, 1e-9);
    assert_eq!(total.fiber, 0.0);
}

#[test]
fn test_menu_unknown_food_leaves_menu_untouched() {
    let mut menu = MenuSession::new(&DEFAULT_REFERENCE);
    menu.add_entry("fruit", "Pisang Ambon", 100.0).unwrap();

    assert!(matches!(
        menu.add_entry("fruit", "Nanas Goreng", 100.0),
        Err(NutriError::FoodNotFound { .. })
    ));
    assert!(matches!(
        menu.add_entry("dessert", "Es Krim", 100.0),
        Err(NutriError::UnknownCategory(_))
    ));
    assert_eq!(menu.len(), 1);
    assert_eq!(menu.total_nutrition().energy, 50.0);
}

#[test]
fn test_tolerance_statuses() {
    assert_eq!(
        evaluate_tolerance(1500.0, 2000.0).unwrap().status,
        ToleranceStatus::Kurang
    );
    assert_eq!(
        evaluate_tolerance(2100.0, 2000.0).unwrap().status,
        ToleranceStatus::Sesuai
    );
    assert_eq!(
        evaluate_tolerance(2500.0, 2000.0).unwrap().status,
        ToleranceStatus::Berlebih
    );
    assert!(matches!(
        evaluate_tolerance(10.0, 0.0),
        Err(NutriError::UndefinedTarget { .. })
    ));
}

#[test]
fn test_meal_tolerance_uses_share() {
    // lunch share of 2000 is 600, band 480-720
    let report = evaluate_meal_tolerance(700.0, 2000.0, MealOccasion::Lunch).unwrap();
    assert_eq!(report.target, 600.0);
    assert_eq!(report.min, 480.0);
    assert_eq!(report.max, 720.0);
    assert_eq!(report.status, ToleranceStatus::Sesuai);
    assert_eq!(report.percentage, 117.0);
}

#[test]
fn test_breakfast_menu_against_average_target() {
    let calc = NeedsCalculator::embedded();
    let target = calc.target_needs(25.0, None);

    let mut menu = MenuSession::new(&DEFAULT_REFERENCE);
    menu.add_entry("carbohydrate", "Nasi Beras Giling putih", 150.0)
        .unwrap();
    menu.add_entry("plantProtein", "Tahu", 100.0).unwrap();

    let checks = menu.compare_to_meal_target(&target, MealOccasion::Breakfast);
    assert_eq!(checks.len(), 5);

    let status = |nutrient: Nutrient| {
        checks
            .iter()
            .find(|c| c.nutrient == nutrient)
            .and_then(|c| c.report)
            .map(|r| r.status)
    };
    // energy 423 vs 612.5, band 490-735
    assert_eq!(status(Nutrient::Energy), Some(ToleranceStatus::Kurang));
    // protein 18 vs 15.75, band 13-19
    assert_eq!(status(Nutrient::Protein), Some(ToleranceStatus::Sesuai));
    assert_eq!(status(Nutrient::Fiber), Some(ToleranceStatus::Kurang));
}

#[test]
fn test_infant_fiber_has_no_band() {
    let calc = NeedsCalculator::embedded();
    let target = calc.target_needs(0.5, None);

    let mut menu = MenuSession::new(&DEFAULT_REFERENCE);
    menu.add_entry("fruit", "Pisang Ambon", 50.0).unwrap();

    let checks = menu.compare_to_target(&target);
    let fiber = checks.iter().find(|c| c.nutrient == Nutrient::Fiber).unwrap();
    assert!(fiber.report.is_none());
    let energy = checks.iter().find(|c| c.nutrient == Nutrient::Energy).unwrap();
    assert!(energy.report.is_some());
}
