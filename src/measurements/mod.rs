pub mod error;
pub mod fetcher;
pub mod raw_table;

#[cfg(test)]
pub(crate) mod test_server;
