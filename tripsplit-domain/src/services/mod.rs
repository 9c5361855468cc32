pub mod aggregator;
pub mod debt_generator;
pub mod settlement_consolidator;

pub use aggregator::Aggregator;
pub use debt_generator::DebtGenerator;
pub use settlement_consolidator::SettlementConsolidator;
