use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Display, Error)]
#[display("type descriptor is missing")]
pub struct MissingTypeDescriptorError;

#[derive(Debug, Display, Error)]
#[display("owning assembly could not be resolved")]
pub struct MissingAssemblyHandleError;

#[derive(Debug, Display, Error)]
#[display("assembly name cannot be empty")]
pub struct InvalidAssemblyNameError;

#[derive(Debug, Display, Error)]
#[display("no full name available for type '{type_name}'")]
pub struct MissingFullTypeNameError {
    pub type_name: String,
}

#[derive(Debug, Display, Error)]
#[display("rendered type name is empty")]
pub struct EmptyRenderedNameError;

#[derive(Debug, Display, From, Error, IsVariant)]
pub enum AssemblyNameError {
    MissingAssemblyHandle(MissingAssemblyHandleError),
    InvalidAssemblyName(InvalidAssemblyNameError),
}

#[derive(Debug, Display, From, Error, IsVariant)]
pub enum TypeNameError {
    MissingTypeDescriptor(MissingTypeDescriptorError),
    MissingAssemblyHandle(MissingAssemblyHandleError),
    InvalidAssemblyName(InvalidAssemblyNameError),
    MissingFullTypeName(MissingFullTypeNameError),
    EmptyRenderedName(EmptyRenderedNameError),
}

impl From<AssemblyNameError> for TypeNameError {
    fn from(value: AssemblyNameError) -> Self {
        match value {
            AssemblyNameError::MissingAssemblyHandle(err) => err.into(),
            AssemblyNameError::InvalidAssemblyName(err) => err.into(),
        }
    }
}
