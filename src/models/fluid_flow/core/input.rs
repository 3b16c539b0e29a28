mod context;
mod fluid_category;
mod flow_specification;
mod given;
mod mode;

pub use context::AdvisoryContext;
pub use fluid_category::FluidCategory;
pub use flow_specification::FlowSpecification;
pub use given::Given;
pub use mode::CalculationMode;

/// Normalizes a boundary string for case- and separator-insensitive matching.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
