pub mod cashflow;
pub mod costs;
pub mod engine;
pub mod quantities;
pub mod schedule;

#[cfg(test)]
pub(crate) mod test_fixtures;
