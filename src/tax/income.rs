//! Indian income tax under the old and new regimes

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::CalcError;

/// Tax regime a taxpayer can opt for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxRegime {
    /// Lower standard deduction, allows 80C/80D and other deductions
    Old,
    /// Higher standard deduction, no itemized deductions
    New,
}

impl fmt::Display for TaxRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxRegime::Old => write!(f, "Old Regime"),
            TaxRegime::New => write!(f, "New Regime"),
        }
    }
}

/// One marginal bracket; `upper` is `None` for the open top bracket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxSlab {
    pub lower: BigDecimal,
    pub upper: Option<BigDecimal>,
    /// Rate percentage (e.g., 20 for 20%)
    pub rate: BigDecimal,
}

impl TaxSlab {
    pub fn new(lower: u64, upper: Option<u64>, rate: u32) -> Self {
        Self {
            lower: BigDecimal::from(lower),
            upper: upper.map(BigDecimal::from),
            rate: BigDecimal::from(rate),
        }
    }

    /// Tax on the part of `taxable` that falls inside this slab
    pub fn tax_on(&self, taxable: &BigDecimal) -> BigDecimal {
        if taxable <= &self.lower {
            return BigDecimal::from(0);
        }

        let top = match &self.upper {
            Some(upper) if upper < taxable => upper,
            _ => taxable,
        };

        ((top - &self.lower) * &self.rate) / BigDecimal::from(100)
    }
}

/// Bracket table and deduction rules of one regime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegimeRules {
    pub regime: TaxRegime,
    pub standard_deduction: BigDecimal,
    /// Whether 80C, 80D and other deductions reduce taxable income
    pub allows_itemized_deductions: bool,
    pub slabs: Vec<TaxSlab>,
}

impl RegimeRules {
    /// FY rules for the old regime
    pub fn old_regime() -> Self {
        Self {
            regime: TaxRegime::Old,
            standard_deduction: BigDecimal::from(50_000),
            allows_itemized_deductions: true,
            slabs: vec![
                TaxSlab::new(0, Some(250_000), 0),
                TaxSlab::new(250_000, Some(500_000), 5),
                TaxSlab::new(500_000, Some(1_000_000), 20),
                TaxSlab::new(1_000_000, None, 30),
            ],
        }
    }

    /// FY rules for the new regime
    pub fn new_regime() -> Self {
        Self {
            regime: TaxRegime::New,
            standard_deduction: BigDecimal::from(75_000),
            allows_itemized_deductions: false,
            slabs: vec![
                TaxSlab::new(0, Some(300_000), 0),
                TaxSlab::new(300_000, Some(700_000), 5),
                TaxSlab::new(700_000, Some(1_000_000), 10),
                TaxSlab::new(1_000_000, Some(1_200_000), 15),
                TaxSlab::new(1_200_000, Some(1_500_000), 20),
                TaxSlab::new(1_500_000, None, 30),
            ],
        }
    }

    /// Slabs must start at zero, be contiguous and end with an open bracket
    pub fn validate(&self) -> Result<(), TaxError> {
        let zero = BigDecimal::from(0);
        let hundred = BigDecimal::from(100);

        let first = self
            .slabs
            .first()
            .ok_or_else(|| TaxError::InvalidSlabs(format!("{} has no slabs", self.regime)))?;
        if first.lower != zero {
            return Err(TaxError::InvalidSlabs(format!(
                "{} slabs must start at 0, found {}",
                self.regime, first.lower
            )));
        }

        if self.standard_deduction < zero {
            return Err(TaxError::InvalidSlabs(format!(
                "{} standard deduction cannot be negative",
                self.regime
            )));
        }

        for (index, slab) in self.slabs.iter().enumerate() {
            if slab.rate < zero || slab.rate > hundred {
                return Err(TaxError::InvalidSlabs(format!(
                    "{} slab rate {} is outside 0-100%",
                    self.regime, slab.rate
                )));
            }

            let is_last = index + 1 == self.slabs.len();
            match (&slab.upper, is_last) {
                (None, true) => {}
                (None, false) => {
                    return Err(TaxError::InvalidSlabs(format!(
                        "{} slab starting at {} is open but not last",
                        self.regime, slab.lower
                    )));
                }
                (Some(_), true) => {
                    return Err(TaxError::InvalidSlabs(format!(
                        "{} top slab must be open-ended",
                        self.regime
                    )));
                }
                (Some(upper), false) => {
                    if upper <= &slab.lower {
                        return Err(TaxError::InvalidSlabs(format!(
                            "{} slab {}..{} is empty",
                            self.regime, slab.lower, upper
                        )));
                    }
                    if &self.slabs[index + 1].lower != upper {
                        return Err(TaxError::InvalidSlabs(format!(
                            "{} slabs are not contiguous at {}",
                            self.regime, upper
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Cumulative marginal tax on an already-reduced taxable income
    pub fn slab_tax(&self, taxable: &BigDecimal) -> BigDecimal {
        self.slabs.iter().map(|slab| slab.tax_on(taxable)).sum()
    }
}

/// Both regimes and the cess levied on top of base tax
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxConfig {
    pub old_regime: RegimeRules,
    pub new_regime: RegimeRules,
    /// Health and education cess percentage
    pub cess_rate: BigDecimal,
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            old_regime: RegimeRules::old_regime(),
            new_regime: RegimeRules::new_regime(),
            cess_rate: BigDecimal::from(4),
        }
    }
}

impl TaxConfig {
    pub fn validate(&self) -> Result<(), TaxError> {
        self.old_regime.validate()?;
        self.new_regime.validate()?;

        if self.cess_rate < BigDecimal::from(0) {
            return Err(TaxError::InvalidSlabs(format!(
                "cess rate cannot be negative: {}",
                self.cess_rate
            )));
        }

        Ok(())
    }

    pub fn rules(&self, regime: TaxRegime) -> &RegimeRules {
        match regime {
            TaxRegime::Old => &self.old_regime,
            TaxRegime::New => &self.new_regime,
        }
    }
}

/// Itemized deductions claimed under the old regime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxDeductions {
    pub section_80c: BigDecimal,
    pub section_80d: BigDecimal,
    pub other: BigDecimal,
}

impl Default for TaxDeductions {
    fn default() -> Self {
        Self {
            section_80c: BigDecimal::from(0),
            section_80d: BigDecimal::from(0),
            other: BigDecimal::from(0),
        }
    }
}

impl TaxDeductions {
    pub fn total(&self) -> BigDecimal {
        &self.section_80c + &self.section_80d + &self.other
    }
}

/// Tax payable under one regime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegimeTax {
    pub regime: TaxRegime,
    pub taxable_income: BigDecimal,
    pub base_tax: BigDecimal,
    pub cess: BigDecimal,
    pub total_tax: BigDecimal,
}

/// Old and new regime side by side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxComparison {
    pub old: RegimeTax,
    pub new: RegimeTax,
    /// Cheaper regime; the new regime wins a tie
    pub recommended: TaxRegime,
    pub savings: BigDecimal,
}

/// Tax for one regime from gross income
///
/// Taxable income is `max(0, gross - deductions - standard deduction)`, where
/// itemized deductions only count if the regime allows them.
pub fn compute_regime_tax(
    rules: &RegimeRules,
    cess_rate: &BigDecimal,
    gross_income: &BigDecimal,
    deductions: &TaxDeductions,
) -> Result<RegimeTax, TaxError> {
    rules.validate()?;

    let zero = BigDecimal::from(0);
    if gross_income < &zero {
        return Err(TaxError::InvalidAmount(format!(
            "gross income cannot be negative: {}",
            gross_income
        )));
    }

    let mut reductions = rules.standard_deduction.clone();
    if rules.allows_itemized_deductions {
        reductions += deductions.total();
    }

    let taxable_income = if gross_income > &reductions {
        gross_income - &reductions
    } else {
        zero
    };

    let base_tax = rules.slab_tax(&taxable_income);
    let cess = (&base_tax * cess_rate) / BigDecimal::from(100);
    let total_tax = &base_tax + &cess;

    Ok(RegimeTax {
        regime: rules.regime,
        taxable_income,
        base_tax,
        cess,
        total_tax,
    })
}

/// Evaluate both regimes independently and pick the cheaper one
pub fn compare_regimes(
    config: &TaxConfig,
    gross_income: &BigDecimal,
    deductions: &TaxDeductions,
) -> Result<TaxComparison, TaxError> {
    let old = compute_regime_tax(&config.old_regime, &config.cess_rate, gross_income, deductions)?;
    let new = compute_regime_tax(&config.new_regime, &config.cess_rate, gross_income, deductions)?;

    let (recommended, savings) = if old.total_tax < new.total_tax {
        (TaxRegime::Old, &new.total_tax - &old.total_tax)
    } else {
        (TaxRegime::New, &old.total_tax - &new.total_tax)
    };

    Ok(TaxComparison {
        old,
        new,
        recommended,
        savings,
    })
}

/// Income tax errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TaxError {
    #[error("Invalid tax slabs: {0}")]
    InvalidSlabs(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

impl From<TaxError> for CalcError {
    fn from(err: TaxError) -> Self {
        match err {
            TaxError::InvalidSlabs(_) => CalcError::Config(err.to_string()),
            TaxError::InvalidAmount(_) => CalcError::InvalidScenario(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn amount(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    #[test]
    fn test_old_regime_slab_tax() {
        let rules = RegimeRules::old_regime();
        assert_eq!(rules.slab_tax(&amount("800000")), amount("72500"));
        assert_eq!(rules.slab_tax(&amount("250000")), amount("0"));
        assert_eq!(rules.slab_tax(&amount("1500000")), amount("262500"));
    }

    #[test]
    fn test_old_regime_with_cess() {
        let config = TaxConfig::default();
        // 850000 gross less the 50000 standard deduction leaves 800000 taxable
        let tax = compute_regime_tax(
            &config.old_regime,
            &config.cess_rate,
            &amount("850000"),
            &TaxDeductions::default(),
        )
        .unwrap();

        assert_eq!(tax.taxable_income, amount("800000"));
        assert_eq!(tax.base_tax, amount("72500"));
        assert_eq!(tax.cess, amount("2900"));
        assert_eq!(tax.total_tax, amount("75400"));
    }

    #[test]
    fn test_new_regime_ignores_itemized_deductions() {
        let config = TaxConfig::default();
        let deductions = TaxDeductions {
            section_80c: amount("150000"),
            ..TaxDeductions::default()
        };
        let tax = compute_regime_tax(
            &config.new_regime,
            &config.cess_rate,
            &amount("1275000"),
            &deductions,
        )
        .unwrap();

        // 1200000 taxable: 20000 + 30000 + 30000
        assert_eq!(tax.taxable_income, amount("1200000"));
        assert_eq!(tax.base_tax, amount("80000"));
    }

    #[test]
    fn test_deductions_floor_at_zero() {
        let config = TaxConfig::default();
        let tax = compute_regime_tax(
            &config.old_regime,
            &config.cess_rate,
            &amount("40000"),
            &TaxDeductions::default(),
        )
        .unwrap();
        assert_eq!(tax.taxable_income, amount("0"));
        assert_eq!(tax.total_tax, amount("0"));
    }

    #[test]
    fn test_compare_regimes() {
        let config = TaxConfig::default();
        let deductions = TaxDeductions {
            section_80c: amount("150000"),
            section_80d: amount("25000"),
            other: amount("0"),
        };
        let comparison = compare_regimes(&config, &amount("1200000"), &deductions).unwrap();

        // old: 975000 taxable -> 12500 + 95000 = 107500 base
        assert_eq!(comparison.old.base_tax, amount("107500"));
        // new: 1125000 taxable -> 20000 + 30000 + 18750 = 68750 base
        assert_eq!(comparison.new.base_tax, amount("68750"));
        assert_eq!(comparison.recommended, TaxRegime::New);
        assert_eq!(
            comparison.savings,
            &comparison.old.total_tax - &comparison.new.total_tax
        );
    }

    #[test]
    fn test_tie_recommends_new_regime() {
        let config = TaxConfig::default();
        let comparison =
            compare_regimes(&config, &amount("100000"), &TaxDeductions::default()).unwrap();
        assert_eq!(comparison.old.total_tax, comparison.new.total_tax);
        assert_eq!(comparison.recommended, TaxRegime::New);
        assert_eq!(comparison.savings, amount("0"));
    }

    #[test]
    fn test_invalid_slabs() {
        let mut rules = RegimeRules::old_regime();
        rules.slabs[2].lower = BigDecimal::from(600_000);
        assert!(matches!(rules.validate(), Err(TaxError::InvalidSlabs(_))));

        let mut rules = RegimeRules::new_regime();
        rules.slabs.pop();
        assert!(rules.validate().is_err());

        let err: CalcError = TaxError::InvalidSlabs("empty".to_string()).into();
        assert!(matches!(err, CalcError::Config(_)));
    }

    #[test]
    fn test_negative_income_rejected() {
        let config = TaxConfig::default();
        let err = compute_regime_tax(
            &config.old_regime,
            &config.cess_rate,
            &amount("-1"),
            &TaxDeductions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, TaxError::InvalidAmount(_)));
    }
}
