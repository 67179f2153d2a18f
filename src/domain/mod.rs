pub mod inputs;
pub mod statement;
pub mod transaction;

pub use inputs::{
    GenerationOptions, OcrSeedData, PeriodMonths, SalariedInput, SelfEmployedInput, StatementInput,
};
pub use statement::{BankTemplate, Statement, StatementDetails, StatementMeta, UserType};
pub use transaction::Transaction;
