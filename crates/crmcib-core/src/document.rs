//! The CIB document
//!
//! A [`Document`] is an owned snapshot of the configuration+status tree. It is
//! produced by a read, mutated through `&mut`, and handed back for commit.
//! Nothing in this crate keeps a document between calls.
//!
//! Expected hierarchy:
//!
//! ```text
//! <cib>
//!   <configuration>
//!     <crm_config>  <nodes>  <resources>  <constraints>
//!   </configuration>
//!   <status>
//!     <node_state> <lrm> <lrm_resources> <lrm_resource> <lrm_rsc_op/> ...
//!   </status>
//! </cib>
//! ```

use crate::errors::{CibError, Result};
use crate::model::tags;
use xmltree::{EmitterConfig, Element};

/// Owned CIB tree rooted at a single element
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Parse CIB XML text
    ///
    /// The parser error is returned as-is; the accessor decides how much of it
    /// callers get to see.
    pub fn parse(text: &str) -> std::result::Result<Self, xmltree::ParseError> {
        let root = Element::parse(text.as_bytes())?;
        Ok(Self { root })
    }

    pub fn from_root(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// The `<cib>` root element
    ///
    /// # Errors
    ///
    /// Returns `MissingRoot` if the document is rooted at anything else.
    pub fn cib(&self) -> Result<&Element> {
        if self.root.name == tags::CIB {
            Ok(&self.root)
        } else {
            Err(CibError::MissingRoot)
        }
    }

    /// Mutable `<cib>` root element
    ///
    /// # Errors
    ///
    /// Returns `MissingRoot` if the document is rooted at anything else.
    pub fn cib_mut(&mut self) -> Result<&mut Element> {
        if self.root.name == tags::CIB {
            Ok(&mut self.root)
        } else {
            Err(CibError::MissingRoot)
        }
    }

    /// Serialize the tree back to XML text
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the writer fails or emits invalid UTF-8.
    pub fn to_xml_string(&self) -> Result<String> {
        let config = EmitterConfig::new()
            .write_document_declaration(false)
            .perform_indent(false);
        let mut buf = Vec::new();
        self.root
            .write_with_config(&mut buf, config)
            .map_err(|e| CibError::Serialization {
                message: e.to_string(),
            })?;
        String::from_utf8(buf).map_err(|e| CibError::Serialization {
            message: e.to_string(),
        })
    }
}
