//! Savings, loan and retirement examples

use calculator_core::{
    amortization_schedule, compound_interest, format_compact, format_currency, loan_eligibility,
    loan_summary, nps_projection, ppf_maturity, prepayment_impact,
    recurring_contribution_future_value, recurring_deposit_maturity, retirement_plan,
    sip_growth_series, CompoundingFrequency, RatePercent,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("💰 Calculator Core - Savings and Loan Examples\n");

    // 1. SIP with a yearly growth series
    println!("📈 SIP: ₹50,000 a month at 12% for 10 years");
    let rate = RatePercent(12.0);
    let future_value = recurring_contribution_future_value(50_000.0, rate.monthly_decimal(), 120);
    println!("  Invested:     {}", format_currency(6_000_000.0, 0));
    println!("  Future value: {}", format_currency(future_value, 0));
    for point in sip_growth_series(50_000.0, rate.monthly_decimal(), 10)
        .iter()
        .step_by(2)
    {
        println!(
            "    Year {:>2}: {:>8} invested, {:>8} value",
            point.period,
            format_compact(point.principal),
            format_compact(point.total_value)
        );
    }
    println!();

    // 2. Deposits
    println!("🏦 Deposits:");
    let fd = compound_interest(
        100_000.0,
        0.07,
        CompoundingFrequency::Quarterly.periods_per_year(),
        5,
    );
    println!("  FD ₹1,00,000 at 7% quarterly, 5y:  {}", format_currency(fd, 2));
    let rd = recurring_deposit_maturity(5_000.0, 0.07, 36);
    println!("  RD ₹5,000/month at 7%, 36 months: {}", format_currency(rd, 2));
    let ppf = ppf_maturity(150_000.0, 0.071, 15);
    println!("  PPF ₹1.5L/year at 7.1%, 15 years:  {}", format_currency(ppf, 2));
    println!();

    // 3. Loans
    println!("🏠 Home loan: ₹50L at 8.5% for 20 years");
    let monthly_rate = RatePercent(8.5).monthly_decimal();
    let summary = loan_summary(5_000_000.0, monthly_rate, 240);
    println!("  EMI:            {}", format_currency(summary.emi, 0));
    println!("  Total interest: {}", format_currency(summary.total_interest, 0));
    println!("  Interest share: {:.1}%", summary.interest_percent());
    for year in amortization_schedule(5_000_000.0, monthly_rate, 240)
        .iter()
        .filter(|year| year.year % 5 == 0)
    {
        println!(
            "    Year {:>2}: balance {}",
            year.year,
            format_currency(year.closing_balance, 0)
        );
    }

    let eligibility = loan_eligibility(100_000.0, 15_000.0, monthly_rate, 240, 50.0);
    println!(
        "  Eligible on ₹1L income with ₹15K EMIs: {}",
        format_currency(eligibility.eligible_amount, 0)
    );
    println!();

    // 4. Prepayment
    println!("✂️  Prepaying ₹5L on ₹20L outstanding at 9% (180 months left):");
    let impact = prepayment_impact(2_000_000.0, 0.09, 180, 500_000.0)?;
    let (years, months) = impact.tenure_saved_years_months();
    println!("  New tenure:     {} months", impact.new_tenure_months);
    println!("  Tenure saved:   {} years {} months", years, months);
    println!("  Interest saved: {}", format_currency(impact.interest_saved, 0));
    println!();

    // 5. Retirement
    println!("🌅 Retirement at 60 from age 30, ₹50,000/month today:");
    let plan = retirement_plan(30, 60, 50_000.0, 0.06, 0.12)?;
    println!("  Monthly expense at 60: {}", format_currency(plan.future_monthly_expense, 0));
    println!("  Corpus required:       {}", format_currency(plan.corpus_required, 0));
    println!("  Monthly SIP needed:    {}", format_currency(plan.monthly_sip_needed, 0));

    let nps = nps_projection(30, 10_000.0, 0.10)?;
    println!("  NPS ₹10,000/month at 10%:");
    println!("    Corpus:          {}", format_currency(nps.corpus, 0));
    println!("    Lump sum (60%):  {}", format_currency(nps.lump_sum, 0));
    println!("    Monthly pension: {}", format_currency(nps.monthly_pension, 0));

    match retirement_plan(40, 35, 50_000.0, 0.06, 0.12) {
        Ok(_) => println!("  ❌ Expected an invalid scenario"),
        Err(e) => println!("  ✅ Rejected: {}", e),
    }

    println!("\n✅ Savings and loan examples completed!");
    Ok(())
}
