pub(crate) mod presence;
pub(crate) mod serve;
pub(crate) mod views;
