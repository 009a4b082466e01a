pub(crate) mod resistance;
pub(crate) mod sounding;
