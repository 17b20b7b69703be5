use std::sync::Arc;

use tracing::debug;

use tamil_core::translit::RuleTable;

use super::types::{KeyEvent, KeyResponse};
use super::{FieldSession, ModeSwitch};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("field already exists: {0}")]
    DuplicateField(String),
}

struct Field {
    name: String,
    session: FieldSession,
    value: String,
}

impl Field {
    fn apply(&mut self, resp: &KeyResponse) {
        if let Some(value) = &resp.value {
            self.value.clone_from(value);
        }
    }
}

/// A group of transliterating fields sharing one mode switch, each holding
/// the value the host would display. Fields keep their insertion order.
pub struct FormState {
    mode: ModeSwitch,
    table: Arc<RuleTable>,
    fields: Vec<Field>,
}

impl FormState {
    pub fn new(mode: ModeSwitch) -> Self {
        Self::with_table(mode, RuleTable::shared())
    }

    pub fn with_table(mode: ModeSwitch, table: Arc<RuleTable>) -> Self {
        Self {
            mode,
            table,
            fields: Vec::new(),
        }
    }

    pub fn mode(&self) -> &ModeSwitch {
        &self.mode
    }

    pub fn add_field(&mut self, name: &str) -> Result<(), FormError> {
        if self.fields.iter().any(|f| f.name == name) {
            return Err(FormError::DuplicateField(name.to_string()));
        }
        self.fields.push(Field {
            name: name.to_string(),
            session: FieldSession::with_table(self.mode.clone(), Arc::clone(&self.table)),
            value: String::new(),
        });
        Ok(())
    }

    fn field(&self, name: &str) -> Result<&Field, FormError> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    fn field_mut(&mut self, name: &str) -> Result<&mut Field, FormError> {
        self.fields
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    /// Route a key-down event to a field and apply any new value.
    pub fn key(&mut self, name: &str, event: &KeyEvent) -> Result<KeyResponse, FormError> {
        let field = self.field_mut(name)?;
        let resp = field.session.handle_key(event);
        field.apply(&resp);
        Ok(resp)
    }

    /// Route a native change event to a field and apply any new value.
    pub fn change(&mut self, name: &str, native_value: &str) -> Result<KeyResponse, FormError> {
        let field = self.field_mut(name)?;
        let resp = field.session.handle_change(native_value);
        field.apply(&resp);
        Ok(resp)
    }

    /// Set a value from outside the input (prefill, programmatic clear).
    pub fn set_value(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let field = self.field_mut(name)?;
        field.value = value.to_string();
        field.session.sync_value(Some(value));
        Ok(())
    }

    pub fn value(&self, name: &str) -> Result<&str, FormError> {
        self.field(name).map(|f| f.value.as_str())
    }

    pub fn raw(&self, name: &str) -> Result<&str, FormError> {
        self.field(name).map(|f| f.session.raw())
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|f| (f.name.as_str(), f.value.as_str()))
    }

    /// Form reset: every value and every buffer is emptied.
    pub fn reset(&mut self) {
        debug!(fields = self.fields.len(), "form reset");
        for field in &mut self.fields {
            field.value.clear();
            field.session.sync_value(None);
        }
    }
}
