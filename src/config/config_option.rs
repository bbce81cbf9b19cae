use crate::types::err::{self};

/// A named configuration option, with bounds on the value of the option.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option, if the value is within the bounds of the option.
    pub fn set(&mut self, value: T) -> Result<(), err::ErrorKind> {
        if value < self.min || self.max < value {
            return Err(err::ConfigError::OutOfBounds(self.name).into());
        }
        self.value = value;
        Ok(())
    }
}
