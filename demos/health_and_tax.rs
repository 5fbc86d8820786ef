//! Health, tax and engine examples

use bigdecimal::BigDecimal;
use calculator_core::{
    activity_table, assess_diabetes_risk, bmi, bmi_category, bmr, compare_regimes, gratuity,
    ideal_weight_report, predict_child_height, utils::MemoryResultCache, walking_estimate,
    CalculationOutcome, CalculatorEngine, CalculatorKind, DiabetesRiskInputs, Gender,
    TaxConfig, TaxDeductions,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("🩺 Calculator Core - Health and Tax Examples\n");

    // 1. Body measures
    println!("⚖️  70 kg, 175 cm, 30 year old male:");
    let value = bmi(70.0, 175.0);
    println!("  BMI: {:.1} ({})", value, bmi_category(value));
    let basal = bmr(70.0, 175.0, 30.0, Gender::Male);
    println!("  BMR: {:.0} kcal/day", basal);
    for (level, calories) in activity_table(basal) {
        println!("    {:<12} {:.0} kcal", level.to_string(), calories);
    }

    let report = ideal_weight_report(175.0, Gender::Male);
    for (method, weight) in &report.estimates {
        println!("  Ideal weight ({}): {:.1} kg", method, weight);
    }
    println!(
        "  Healthy range: {:.1} - {:.1} kg",
        report.healthy_range.min_kg, report.healthy_range.max_kg
    );

    let child = predict_child_height(175.0, 160.0, Gender::Female);
    println!(
        "  Daughter's predicted height: {:.0} cm ({:.0} - {:.0})",
        child.predicted_cm, child.min_cm, child.max_cm
    );

    let walk = walking_estimate(70.0, 45.0, 5.0, 5.0);
    println!(
        "  45 min walk at 5 km/h, 5% incline: {:.0} kcal, {:.1} km, ~{:.0} steps (MET {:.1})",
        walk.calories, walk.distance_km, walk.steps, walk.met
    );
    println!();

    // 2. Diabetes risk
    println!("🩸 Diabetes risk:");
    let assessment = assess_diabetes_risk(&DiabetesRiskInputs {
        age_years: 52.0,
        bmi: 28.0,
        waist_cm: 96.0,
        family_history: true,
        high_blood_pressure: false,
        physically_active: false,
    });
    println!(
        "  Score {}/30 ({:.0}%): {}",
        assessment.score, assessment.percentage, assessment.level
    );
    for line in &assessment.recommendations {
        println!("    • {}", line);
    }
    println!();

    // 3. Income tax
    println!("🧾 Income tax on ₹12,00,000 with ₹1.5L 80C and ₹25K 80D:");
    let deductions = TaxDeductions {
        section_80c: BigDecimal::from(150_000),
        section_80d: BigDecimal::from(25_000),
        other: BigDecimal::from(0),
    };
    let gross = BigDecimal::from(1_200_000);
    let comparison = compare_regimes(&TaxConfig::default(), &gross, &deductions)?;
    for regime in [&comparison.old, &comparison.new] {
        println!(
            "  {}: taxable ₹{}, tax ₹{} + cess ₹{} = ₹{}",
            regime.regime, regime.taxable_income, regime.base_tax, regime.cess, regime.total_tax
        );
    }
    println!(
        "  Recommended: {} (saves ₹{})",
        comparison.recommended, comparison.savings
    );
    println!(
        "  Gratuity on ₹50,000 after 10 years: ₹{:.0}",
        gratuity(50_000.0, 10)
    );
    println!();

    // 4. Engine with a cache
    println!("⚙️  Engine dispatch:");
    let mut engine = CalculatorEngine::new(MemoryResultCache::new());
    let request = r#"{"calculator": "bmi", "weight_kg": 82, "height_cm": 178}"#;
    for attempt in 1..=2 {
        let outcome = engine.calculate_json(request).await?;
        if let CalculationOutcome::Bmi { bmi, category, .. } = outcome {
            println!("  Attempt {}: BMI {:.1} ({})", attempt, bmi, category);
        }
    }

    println!("  {} calculators available:", CalculatorKind::ALL.len());
    for kind in CalculatorKind::ALL {
        println!("    {:<18} {}", kind.slug(), kind.title());
    }

    println!("\n✅ Health and tax examples completed!");
    Ok(())
}
