//! # Equation Registry
//!
//! Central registry of every formula metabolic_core implements. Each equation
//! carries its plain-text formula, literature reference, variable definitions
//! and the option fields it requires.
//!
//! The requirement lists here are the ones the BMR and TDEE validators use,
//! so documentation and validation cannot drift apart.
//!
//! ## Usage
//!
//! ```rust
//! use metabolic_core::equations::registry::Equation;
//! use metabolic_core::options::OptionField;
//!
//! let meta = Equation::BmrKatchMcArdle.metadata();
//! assert_eq!(meta.name, "Katch-McArdle");
//! assert_eq!(meta.required_options, &[OptionField::Weight, OptionField::BodyFat]);
//! ```

use serde::{Deserialize, Serialize};

use crate::options::OptionField;

// ============================================================================
// Code References
// ============================================================================

/// Literature source for an equation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// Peer-reviewed article
    Journal {
        authors: &'static str,
        year: u16,
        journal: &'static str,
    },
    /// Textbook
    Textbook {
        authors: &'static str,
        title: &'static str,
    },
    /// Widely used clinical or coaching guideline without a single source
    Guideline { description: &'static str },
}

impl CodeReference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Journal { authors, year, journal } => {
                format!("{} ({}), {}", authors, year, journal)
            }
            CodeReference::Textbook { authors, title } => format!("{}, {}", authors, title),
            CodeReference::Guideline { description } => description.to_string(),
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for grouping equations in generated documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Weight relative to height (BMI, IBW)
    BodyComposition,
    /// Calorie expenditure (BMR, TDEE)
    EnergyExpenditure,
    /// Fluid requirements
    Hydration,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::BodyComposition => "Body Composition",
            EquationCategory::EnergyExpenditure => "Energy Expenditure",
            EquationCategory::Hydration => "Hydration",
        }
    }

    /// Sort order for generated documentation (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::BodyComposition => 1,
            EquationCategory::EnergyExpenditure => 2,
            EquationCategory::Hydration => 3,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone, Serialize)]
pub struct Variable {
    /// Symbol (e.g., "w", "h", "a")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "kg", "cm", "years")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for one formula.
#[derive(Debug, Clone, Serialize)]
pub struct EquationMetadata {
    /// Published name (e.g., "Mifflin-St Jeor")
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Literature reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Options-bundle fields validated before the formula runs.
    /// Empty for formulas that take positional arguments.
    pub required_options: &'static [OptionField],
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

const BMR_DEMOGRAPHIC: &[OptionField] = &[
    OptionField::Age,
    OptionField::Weight,
    OptionField::Gender,
    OptionField::Height,
];
const BMR_LEAN_MASS: &[OptionField] = &[OptionField::Weight, OptionField::BodyFat];
const TDEE_DEMOGRAPHIC: &[OptionField] = &[
    OptionField::Age,
    OptionField::Weight,
    OptionField::Gender,
    OptionField::Height,
    OptionField::ActivityLevel,
];
const TDEE_LEAN_MASS: &[OptionField] = &[
    OptionField::Weight,
    OptionField::ActivityLevel,
    OptionField::BodyFat,
];

/// Every formula implemented by metabolic_core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equation {
    /// BMI = w / h^2
    Bmi,
    /// Mifflin-St Jeor basal metabolic rate
    BmrMifflinStJeor,
    /// Revised Harris-Benedict basal metabolic rate
    BmrHarrisBenedict,
    /// Katch-McArdle basal metabolic rate from lean mass
    BmrKatchMcArdle,
    /// Mifflin-St Jeor BMR scaled by activity
    TdeeMifflinStJeor,
    /// Katch-McArdle BMR scaled by activity
    TdeeKatchMcArdle,
    /// Robinson ideal body weight
    IbwRobinson,
    /// Miller ideal body weight
    IbwMiller,
    /// Devine ideal body weight
    IbwDevine,
    /// Hamwi ideal body weight
    IbwHamwi,
    /// Daily fluid intake
    FluidIntake,
}

impl Equation {
    /// Option fields this equation requires before it can run
    pub fn required_options(&self) -> &'static [OptionField] {
        match self {
            Equation::BmrMifflinStJeor | Equation::BmrHarrisBenedict => BMR_DEMOGRAPHIC,
            Equation::BmrKatchMcArdle => BMR_LEAN_MASS,
            Equation::TdeeMifflinStJeor => TDEE_DEMOGRAPHIC,
            Equation::TdeeKatchMcArdle => TDEE_LEAN_MASS,
            Equation::Bmi
            | Equation::IbwRobinson
            | Equation::IbwMiller
            | Equation::IbwDevine
            | Equation::IbwHamwi
            | Equation::FluidIntake => &[],
        }
    }

    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        let required_options = self.required_options();
        match self {
            Equation::Bmi => EquationMetadata {
                name: "Body Mass Index",
                description: "Weight relative to the square of height",
                formula_plain: "BMI = w / h^2",
                reference: CodeReference::Journal {
                    authors: "Keys et al.",
                    year: 1972,
                    journal: "Journal of Chronic Diseases 25(6)",
                },
                variables: vec![
                    Variable::new("w", "Body weight", "kg"),
                    Variable::new("h", "Height", "m"),
                ],
                required_options,
                assumptions: vec!["Rounded to one decimal place"],
                category: EquationCategory::BodyComposition,
                source_module: "equations/body.rs",
                source_function: "body_mass_index",
            },

            Equation::BmrMifflinStJeor => EquationMetadata {
                name: "Mifflin-St Jeor",
                description: "Resting energy expenditure from weight, height, age and gender",
                formula_plain: "BMR = 10w + 6.25h - 5a + s, s = +5 (male), -161 (female)",
                reference: CodeReference::Journal {
                    authors: "Mifflin et al.",
                    year: 1990,
                    journal: "American Journal of Clinical Nutrition 51(2)",
                },
                variables: vec![
                    Variable::new("w", "Body weight", "kg"),
                    Variable::new("h", "Height", "cm"),
                    Variable::new("a", "Age", "years"),
                    Variable::new("s", "Gender constant", "kcal/day"),
                ],
                required_options,
                assumptions: vec!["Rounded to the nearest kcal"],
                category: EquationCategory::EnergyExpenditure,
                source_module: "equations/energy.rs",
                source_function: "mifflin_st_jeor",
            },

            Equation::BmrHarrisBenedict => EquationMetadata {
                name: "Harris-Benedict",
                description: "Revised Harris-Benedict basal metabolic rate",
                formula_plain: "male: 13.397w + 4.799h - 5.677a + 88.362; female: 9.247w + 3.098h - 4.33a + 447.593",
                reference: CodeReference::Journal {
                    authors: "Roza and Shizgal",
                    year: 1984,
                    journal: "American Journal of Clinical Nutrition 40(1)",
                },
                variables: vec![
                    Variable::new("w", "Body weight", "kg"),
                    Variable::new("h", "Height", "cm"),
                    Variable::new("a", "Age", "years"),
                ],
                required_options,
                assumptions: vec!["Rounded to the nearest kcal"],
                category: EquationCategory::EnergyExpenditure,
                source_module: "equations/energy.rs",
                source_function: "harris_benedict",
            },

            Equation::BmrKatchMcArdle => EquationMetadata {
                name: "Katch-McArdle",
                description: "Basal metabolic rate from lean body mass",
                formula_plain: "LBM = w(100 - bf)/100; BMR = floor(370 + 21.6 LBM)",
                reference: CodeReference::Textbook {
                    authors: "McArdle, Katch and Katch",
                    title: "Exercise Physiology: Nutrition, Energy, and Human Performance",
                },
                variables: vec![
                    Variable::new("w", "Body weight", "kg"),
                    Variable::new("bf", "Body fat", "%"),
                    Variable::new("LBM", "Lean body mass", "kg"),
                ],
                required_options,
                assumptions: vec!["Independent of gender and age", "Floored before rounding"],
                category: EquationCategory::EnergyExpenditure,
                source_module: "equations/energy.rs",
                source_function: "katch_mcardle",
            },

            Equation::TdeeMifflinStJeor => EquationMetadata {
                name: "Mifflin-St Jeor",
                description: "Total daily energy expenditure from Mifflin-St Jeor BMR",
                formula_plain: "TDEE = BMR_mifflin * k",
                reference: CodeReference::Guideline {
                    description: "Activity factor multipliers (1.2 sedentary to 1.9 extra active)",
                },
                variables: vec![
                    Variable::new("BMR_mifflin", "Rounded Mifflin-St Jeor BMR", "kcal/day"),
                    Variable::new("k", "Activity multiplier", "-"),
                ],
                required_options,
                assumptions: vec!["BMR is rounded before scaling", "Rounded to the nearest kcal"],
                category: EquationCategory::EnergyExpenditure,
                source_module: "equations/energy.rs",
                source_function: "apply_activity_multiplier",
            },

            Equation::TdeeKatchMcArdle => EquationMetadata {
                name: "Katch-McArdle",
                description: "Total daily energy expenditure from Katch-McArdle BMR",
                formula_plain: "TDEE = BMR_katch * k",
                reference: CodeReference::Guideline {
                    description: "Activity factor multipliers (1.2 sedentary to 1.9 extra active)",
                },
                variables: vec![
                    Variable::new("BMR_katch", "Rounded Katch-McArdle BMR", "kcal/day"),
                    Variable::new("k", "Activity multiplier", "-"),
                ],
                required_options,
                assumptions: vec!["BMR is rounded before scaling", "Rounded to the nearest kcal"],
                category: EquationCategory::EnergyExpenditure,
                source_module: "equations/energy.rs",
                source_function: "apply_activity_multiplier",
            },

            Equation::IbwRobinson => ibw_metadata(
                "Robinson",
                "52.0 + 1.9 in (male), 49.0 + 1.7 in (female)",
                CodeReference::Journal {
                    authors: "Robinson et al.",
                    year: 1983,
                    journal: "American Journal of Hospital Pharmacy 40(6)",
                },
            ),

            Equation::IbwMiller => ibw_metadata(
                "Miller",
                "56.2 + 1.41 in (male), 53.1 + 1.36 in (female)",
                CodeReference::Journal {
                    authors: "Miller et al.",
                    year: 1983,
                    journal: "American Journal of Hospital Pharmacy 40(10)",
                },
            ),

            Equation::IbwDevine => ibw_metadata(
                "Devine",
                "50.0 + 2.3 in (male), 45.5 + 2.3 in (female)",
                CodeReference::Journal {
                    authors: "Devine",
                    year: 1974,
                    journal: "Drug Intelligence & Clinical Pharmacy 8",
                },
            ),

            Equation::IbwHamwi => ibw_metadata(
                "Hamwi",
                "48.0 + 2.7 in (male), 45.5 + 2.2 in (female)",
                CodeReference::Journal {
                    authors: "Hamwi",
                    year: 1964,
                    journal: "Diabetes Mellitus: Diagnosis and Treatment, American Diabetes Association",
                },
            ),

            Equation::FluidIntake => EquationMetadata {
                name: "Daily Fluid Intake",
                description: "Recommended daily fluid intake from body weight and activity",
                formula_plain: "V = floor((0.67 lb + 12 m/30) * 0.0284131)",
                reference: CodeReference::Guideline {
                    description: "0.67 fl oz per lb of body weight plus 12 fl oz per 30 active minutes",
                },
                variables: vec![
                    Variable::new("lb", "Body weight (2.20462 lb/kg)", "lb"),
                    Variable::new("m", "Active minutes per day", "min"),
                    Variable::new("V", "Fluid intake", "L"),
                ],
                required_options,
                assumptions: vec!["Imperial fluid ounces", "Floored to whole liters"],
                category: EquationCategory::Hydration,
                source_module: "equations/body.rs",
                source_function: "daily_fluid_intake",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories in documentation order
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![EnergyExpenditure, BodyComposition, Hydration];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

fn ibw_metadata(
    name: &'static str,
    formula: &'static str,
    reference: CodeReference,
) -> EquationMetadata {
    EquationMetadata {
        name,
        description: "Ideal body weight from height and gender",
        formula_plain: formula,
        reference,
        variables: vec![
            Variable::new("in", "Inches above five feet, (h/30.48 - 5) * 12", "in"),
            Variable::new("h", "Height", "cm"),
        ],
        required_options: &[],
        assumptions: vec![
            "Heights under five feet extrapolate linearly (not clamped)",
            "Rounded to one decimal place",
        ],
        category: EquationCategory::BodyComposition,
        source_module: "equations/body.rs",
        source_function: "ideal_body_weight",
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::Bmi,
    Equation::BmrMifflinStJeor,
    Equation::BmrHarrisBenedict,
    Equation::BmrKatchMcArdle,
    Equation::TdeeMifflinStJeor,
    Equation::TdeeKatchMcArdle,
    Equation::IbwRobinson,
    Equation::IbwMiller,
    Equation::IbwDevine,
    Equation::IbwHamwi,
    Equation::FluidIntake,
];

// ============================================================================
// Markdown Generation
// ============================================================================

/// Generate the EQUATIONS.md reference from the registry.
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(r#"# Metabolic Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

Every formula used by metabolic_core, with its reference, source location,
required inputs and assumptions.

## Units

| Quantity | Unit |
|----------|------|
| Height | cm (BMI: m) |
| Weight | kg |
| Age | years |
| Body fat | % (0-100) |
| Activity | minutes per day |

---

"#);

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            if !meta.required_options.is_empty() {
                let labels: Vec<&str> = meta.required_options.iter().map(|f| f.label()).collect();
                output.push_str(&format!("**Required options:** {}\n\n", labels.join(", ")));
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}
