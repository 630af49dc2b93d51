use super::{Db, Shared};
use crate::{driver::Driver, Error, Result};

use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Builder {
    driver: Option<Box<dyn Driver>>,
    max_concurrent_annotations: Option<usize>,
}

impl Builder {
    /// Set the driver executing fetch plans.
    pub fn driver(&mut self, driver: impl Driver) -> &mut Self {
        self.driver = Some(Box::new(driver));
        self
    }

    /// Limit how many annotation tasks of one load run at the same time.
    ///
    /// By default all tasks of a load run concurrently.
    pub fn max_concurrent_annotations(&mut self, limit: usize) -> &mut Self {
        self.max_concurrent_annotations = Some(limit);
        self
    }

    pub fn build(&mut self) -> Result<Db> {
        let Some(driver) = self.driver.take() else {
            return Err(Error::invalid_schema("no driver configured"));
        };

        if self.max_concurrent_annotations == Some(0) {
            return Err(Error::invalid_schema(
                "max_concurrent_annotations must be at least 1",
            ));
        }

        Ok(Db {
            shared: Arc::new(Shared {
                driver,
                max_concurrent_annotations: self.max_concurrent_annotations,
            }),
        })
    }
}
