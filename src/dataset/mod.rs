pub(crate) mod driver;
pub(crate) mod opts;
pub(crate) mod reader;
pub(crate) mod writer;
