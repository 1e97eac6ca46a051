/// Use cases - Application business logic
mod assess_vendors;

pub use assess_vendors::AssessVendorsUseCase;
