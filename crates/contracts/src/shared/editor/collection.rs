//! Ordered editable collection with 1-based dense sequence numbers.
//!
//! One parameterized model serves every entry kind (wash steps, process
//! entries). Each operation validates fully before touching state, so a
//! rejected call leaves the collection exactly as it was.

use super::error::EditorError;
use super::instance::InstanceId;
use crate::shared::reference::{find_reference, ReferenceOption};
use serde::{Deserialize, Serialize};

/// Тип записи в рабочей области рецепта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Step,
    Process,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Step => "step",
            EntryKind::Process => "process",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Editable field of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryField {
    Time,
    Temp,
    Liters,
    /// stepId for steps, laundryProcessId for process entries
    Reference,
    Remark,
}

impl EntryField {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryField::Time => "time",
            EntryField::Temp => "temp",
            EntryField::Liters => "liters",
            EntryField::Reference => "reference",
            EntryField::Remark => "remark",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, EntryField::Time | EntryField::Temp | EntryField::Liters)
    }

    /// Field names as they arrive from form inputs
    pub fn parse(name: &str) -> Result<Self, EditorError> {
        match name {
            "time" => Ok(EntryField::Time),
            "temp" => Ok(EntryField::Temp),
            "liters" => Ok(EntryField::Liters),
            "reference" | "stepId" | "laundryProcessId" => Ok(EntryField::Reference),
            "remark" => Ok(EntryField::Remark),
            other => Err(EditorError::UnknownField(other.to_string())),
        }
    }
}

/// Validated value ready to be applied to an entry
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    Time(f64),
    Temp(f64),
    Liters(f64),
    Reference(ReferenceOption),
    Remark(String),
}

/// Parse a non-negative finite number from raw input
pub fn parse_non_negative(field: &'static str, raw: &str) -> Result<f64, EditorError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(EditorError::InvalidNumber { field }),
    }
}

/// Row of a [`CollectionEditor`]
pub trait EditorEntry: Clone {
    const KIND: EntryKind;

    /// Fresh entry with no reference selected yet
    fn placeholder(instance_id: InstanceId, sequence: u32) -> Self;

    fn instance_id(&self) -> InstanceId;

    fn sequence(&self) -> u32;

    fn set_sequence(&mut self, sequence: u32);

    /// Resolved server reference (step definition, laundry process)
    fn reference_id(&self) -> Option<&str>;

    fn accepts(field: EntryField) -> bool;

    /// Apply a change already validated by [`CollectionEditor::update_field`]
    fn apply(&mut self, change: FieldChange);

    fn is_resolved(&self) -> bool {
        self.reference_id().is_some_and(|r| !r.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionEditor<E> {
    entries: Vec<E>,
}

impl<E> Default for CollectionEditor<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<E: EditorEntry> CollectionEditor<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from loaded entries, ordered and renumbered 1..N
    pub fn from_entries(mut entries: Vec<E>) -> Self {
        entries.sort_by_key(|e| e.sequence());
        let mut editor = Self { entries };
        editor.resequence();
        editor
    }

    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<E> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&E> {
        self.entries.get(index)
    }

    pub fn position_of(&self, instance_id: InstanceId) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.instance_id() == instance_id)
    }

    pub fn find(&self, instance_id: InstanceId) -> Option<&E> {
        self.entries.iter().find(|e| e.instance_id() == instance_id)
    }

    /// Every entry carries a resolved reference
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|e| e.is_resolved())
    }

    pub fn sequences(&self) -> Vec<u32> {
        self.entries.iter().map(|e| e.sequence()).collect()
    }

    /// `max(sequence) + 1`, so a gap left by an external edit is never reused
    pub fn next_sequence(&self) -> u32 {
        self.entries
            .iter()
            .map(|e| e.sequence())
            .max()
            .unwrap_or(0)
            + 1
    }

    fn last_added(&self) -> Option<&E> {
        self.entries.iter().max_by_key(|e| e.sequence())
    }

    /// Append a placeholder entry and return a copy of it.
    pub fn add_entry(&mut self) -> Result<E, EditorError> {
        if let Some(last) = self.last_added() {
            if !last.is_resolved() {
                return Err(EditorError::IncompletePriorEntry {
                    kind: E::KIND,
                    sequence: last.sequence(),
                });
            }
        }

        let sequence = self.next_sequence();
        if self.entries.iter().any(|e| e.sequence() == sequence) {
            return Err(EditorError::SequenceCollision(sequence));
        }

        let entry = E::placeholder(InstanceId::new(), sequence);
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Validate `raw` for `field` and apply it to the entry at `index`.
    ///
    /// Returns the updated entry so callers can mirror it elsewhere.
    pub fn update_field(
        &mut self,
        index: usize,
        field: EntryField,
        raw: &str,
        lookup: &[ReferenceOption],
    ) -> Result<E, EditorError> {
        if index >= self.entries.len() {
            return Err(EditorError::IndexOutOfRange(index));
        }
        if !E::accepts(field) {
            return Err(EditorError::UnsupportedField(field.as_str()));
        }

        let change = match field {
            EntryField::Time => FieldChange::Time(parse_non_negative("time", raw)?),
            EntryField::Temp => FieldChange::Temp(parse_non_negative("temp", raw)?),
            EntryField::Liters => FieldChange::Liters(parse_non_negative("liters", raw)?),
            EntryField::Reference => {
                if raw.trim().is_empty() {
                    return Err(EditorError::MissingReference { kind: E::KIND });
                }
                let option = find_reference(lookup, raw)
                    .ok_or_else(|| EditorError::UnknownReference(raw.trim().to_string()))?;
                FieldChange::Reference(option.clone())
            }
            EntryField::Remark => FieldChange::Remark(raw.to_string()),
        };

        let entry = &mut self.entries[index];
        entry.apply(change);
        Ok(entry.clone())
    }

    /// Remove the entry at `index` and renumber the rest densely from 1.
    pub fn remove_entry(&mut self, index: usize) -> Result<E, EditorError> {
        if index >= self.entries.len() {
            return Err(EditorError::IndexOutOfRange(index));
        }
        let removed = self.entries.remove(index);
        self.resequence();
        Ok(removed)
    }

    /// Swap in a new value for the entry with the same instance id.
    pub fn replace(&mut self, entry: E) -> bool {
        match self.position_of(entry.instance_id()) {
            Some(pos) => {
                self.entries[pos] = entry;
                true
            }
            None => false,
        }
    }

    fn resequence(&mut self) {
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.set_sequence(i as u32 + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: InstanceId,
        seq: u32,
        reference: Option<String>,
        hours: f64,
    }

    impl EditorEntry for Row {
        const KIND: EntryKind = EntryKind::Step;

        fn placeholder(instance_id: InstanceId, sequence: u32) -> Self {
            Row {
                id: instance_id,
                seq: sequence,
                reference: None,
                hours: 0.0,
            }
        }
        fn instance_id(&self) -> InstanceId {
            self.id
        }
        fn sequence(&self) -> u32 {
            self.seq
        }
        fn set_sequence(&mut self, sequence: u32) {
            self.seq = sequence;
        }
        fn reference_id(&self) -> Option<&str> {
            self.reference.as_deref()
        }
        fn accepts(field: EntryField) -> bool {
            matches!(field, EntryField::Time | EntryField::Reference)
        }
        fn apply(&mut self, change: FieldChange) {
            match change {
                FieldChange::Time(v) => self.hours = v,
                FieldChange::Reference(o) => self.reference = Some(o.id),
                _ => {}
            }
        }
    }

    fn lookup() -> Vec<ReferenceOption> {
        vec![
            ReferenceOption::new("s1", "Desize"),
            ReferenceOption::new("s2", "Enzyme"),
        ]
    }

    fn resolved(editor: &mut CollectionEditor<Row>) {
        let index = editor.len() - 1;
        editor
            .update_field(index, EntryField::Reference, "s1", &lookup())
            .unwrap();
    }

    #[test]
    fn test_add_entry_rejected_while_prior_unresolved() {
        let mut editor = CollectionEditor::<Row>::new();
        editor.add_entry().unwrap();
        let err = editor.add_entry().unwrap_err();
        assert_eq!(
            err,
            EditorError::IncompletePriorEntry {
                kind: EntryKind::Step,
                sequence: 1
            }
        );
        assert_eq!(editor.len(), 1);
    }

    #[test]
    fn test_next_sequence_uses_max_not_count() {
        let mut row = Row::placeholder(InstanceId::new(), 5);
        row.reference = Some("s1".into());
        let mut editor = CollectionEditor { entries: vec![row] };
        let added = editor.add_entry().unwrap();
        assert_eq!(added.seq, 6);
    }

    #[test]
    fn test_remove_keeps_sequences_dense() {
        let mut editor = CollectionEditor::<Row>::new();
        for _ in 0..5 {
            editor.add_entry().unwrap();
            resolved(&mut editor);
        }
        editor.remove_entry(1).unwrap();
        assert_eq!(editor.sequences(), vec![1, 2, 3, 4]);
        editor.remove_entry(3).unwrap();
        assert_eq!(editor.sequences(), vec![1, 2, 3]);
        editor.add_entry().unwrap();
        assert_eq!(editor.sequences(), vec![1, 2, 3, 4]);
        editor.remove_entry(0).unwrap();
        assert_eq!(editor.sequences(), vec![1, 2, 3]);
    }

    #[test]
    fn test_mixed_add_remove_always_dense() {
        let mut editor = CollectionEditor::<Row>::new();
        let script = [true, true, false, true, true, false, false, true, false, false, true];
        for (step, add) in script.iter().enumerate() {
            if *add || editor.is_empty() {
                editor.add_entry().unwrap();
                resolved(&mut editor);
            } else {
                editor.remove_entry(step % editor.len()).unwrap();
            }
            let expected: Vec<u32> = (1..=editor.len() as u32).collect();
            assert_eq!(editor.sequences(), expected);
        }
    }

    #[test]
    fn test_update_numeric_field_validates_before_mutating() {
        let mut editor = CollectionEditor::<Row>::new();
        editor.add_entry().unwrap();
        let before = editor.clone();

        for bad in ["", "abc", "-1", "NaN", "inf"] {
            let err = editor
                .update_field(0, EntryField::Time, bad, &lookup())
                .unwrap_err();
            assert_eq!(err, EditorError::InvalidNumber { field: "time" });
            assert_eq!(editor, before);
        }

        let row = editor
            .update_field(0, EntryField::Time, " 12.5 ", &lookup())
            .unwrap();
        assert_eq!(row.hours, 12.5);
    }

    #[test]
    fn test_update_reference_requires_known_value() {
        let mut editor = CollectionEditor::<Row>::new();
        editor.add_entry().unwrap();

        assert_eq!(
            editor.update_field(0, EntryField::Reference, "", &lookup()),
            Err(EditorError::MissingReference {
                kind: EntryKind::Step
            })
        );
        assert_eq!(
            editor.update_field(0, EntryField::Reference, "s9", &lookup()),
            Err(EditorError::UnknownReference("s9".into()))
        );
        assert!(!editor.is_complete());

        editor
            .update_field(0, EntryField::Reference, "s2", &lookup())
            .unwrap();
        assert!(editor.is_complete());
    }

    #[test]
    fn test_unsupported_and_out_of_range() {
        let mut editor = CollectionEditor::<Row>::new();
        assert_eq!(
            editor.remove_entry(0),
            Err(EditorError::IndexOutOfRange(0))
        );
        editor.add_entry().unwrap();
        assert_eq!(
            editor.update_field(0, EntryField::Remark, "x", &lookup()),
            Err(EditorError::UnsupportedField("remark"))
        );
        assert_eq!(
            editor.update_field(3, EntryField::Time, "1", &lookup()),
            Err(EditorError::IndexOutOfRange(3))
        );
    }

    #[test]
    fn test_from_entries_sorts_and_renumbers() {
        let a = Row::placeholder(InstanceId::new(), 7);
        let b = Row::placeholder(InstanceId::new(), 2);
        let editor = CollectionEditor::from_entries(vec![a.clone(), b.clone()]);
        assert_eq!(editor.entries()[0].id, b.id);
        assert_eq!(editor.sequences(), vec![1, 2]);
    }

    #[test]
    fn test_field_names_parse() {
        assert_eq!(EntryField::parse("stepId"), Ok(EntryField::Reference));
        assert_eq!(EntryField::parse("liters"), Ok(EntryField::Liters));
        assert!(EntryField::parse("color").is_err());
    }
}
