//! Document accessor
//!
//! The only place where documents cross the process boundary: a read runs
//! the query command and parses its output, a commit serializes the whole
//! tree into the replace command, and a create pipes a fragment into the
//! create command.

use crate::config::EngineConfig;
use crate::runner::{CommandRunner, CrmCommand};
use crmcib_core::errors::{CibError, Result};
use crmcib_core::Document;
use tracing::{debug, error, trace, warn};

pub struct DocumentAccessor {
    query: Box<dyn CommandRunner>,
    replace: Box<dyn CommandRunner>,
    create: Box<dyn CommandRunner>,
}

impl DocumentAccessor {
    pub fn new(
        query: Box<dyn CommandRunner>,
        replace: Box<dyn CommandRunner>,
        create: Box<dyn CommandRunner>,
    ) -> Self {
        Self {
            query,
            replace,
            create,
        }
    }

    /// Accessor running the configured utility as real processes
    pub fn cibadmin(config: &EngineConfig) -> Self {
        Self::new(
            Box::new(CrmCommand::query(&config.crm_utility)),
            Box::new(CrmCommand::replace(&config.crm_utility)),
            Box::new(CrmCommand::create(&config.crm_utility)),
        )
    }

    /// Fetch and parse a fresh document
    ///
    /// # Errors
    ///
    /// Returns `ReadFailed` if the query command fails or its output does not
    /// parse. The cause is logged rather than returned.
    pub fn read(&self) -> Result<Document> {
        let stdout = self.query.execute("").map_err(|failure| {
            error!(exit_code = ?failure.exit_code, stderr = %failure.stderr, "CIB query failed");
            CibError::ReadFailed
        })?;

        let doc = Document::parse(&stdout).map_err(|e| {
            error!(error = %e, "CIB query returned unparseable XML");
            CibError::ReadFailed
        })?;
        debug!(root = %doc.root().name, "read CIB");
        Ok(doc)
    }

    /// Replace the cluster's document with `doc`
    ///
    /// Committing `None` is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the tree cannot be written, or
    /// `CommitFailed` carrying `exit code <n>:\n<stderr>` when the replace
    /// command rejects it.
    pub fn commit(&self, doc: Option<&Document>) -> Result<()> {
        let Some(doc) = doc else {
            debug!("no document to commit");
            return Ok(());
        };

        let data = doc.to_xml_string()?;
        self.replace.execute(&data).map_err(|failure| {
            warn!(exit_code = ?failure.exit_code, "CRM command execution returned an error");
            trace!(data = %data, "CIB data sent to the replace command");
            CibError::CommitFailed {
                details: failure.describe(),
            }
        })?;
        Ok(())
    }

    /// Merge an XML fragment into the cluster's document
    ///
    /// # Errors
    ///
    /// Returns `CreateFailed` carrying the command's failure description.
    pub fn create(&self, fragment: &str) -> Result<()> {
        self.create.execute(fragment).map_err(|failure| {
            warn!(exit_code = ?failure.exit_code, "CRM create command returned an error");
            CibError::CreateFailed {
                details: failure.describe(),
            }
        })?;
        Ok(())
    }
}
