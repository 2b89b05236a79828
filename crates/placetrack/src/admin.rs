//! Admin dashboard: create, update and delete placement records.
//!
//! The dashboard keeps an in-memory copy of the collection. Each mutation is
//! applied to a copy, the whole copy is written back through the
//! [`RecordStore`], and only then does it replace the in-memory state.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::{Error, Result};
use crate::record::{PlacementDraft, PlacementFields, PlacementRecord, RecordId};
use crate::stats::PlacementStats;
use crate::store::RecordStore;

/// Append a new record and return its identifier.
pub fn create_record(
    records: &mut Vec<PlacementRecord>,
    fields: PlacementFields,
    now: DateTime<Utc>,
) -> RecordId {
    let id = RecordId::generate(records, now);
    records.push(PlacementRecord::new(id, fields));
    id
}

/// Replace the fields of the record with identifier `id`.
///
/// # Errors
///
/// Returns [`Error::RecordNotFound`] if no record has that identifier.
pub fn update_record(
    records: &mut [PlacementRecord],
    id: RecordId,
    fields: PlacementFields,
) -> Result<()> {
    let record = records
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or(Error::RecordNotFound { id })?;
    record.apply(fields);
    Ok(())
}

/// Remove the record with identifier `id` and return it.
///
/// # Errors
///
/// Returns [`Error::RecordNotFound`] if no record has that identifier.
pub fn delete_record(records: &mut Vec<PlacementRecord>, id: RecordId) -> Result<PlacementRecord> {
    let index = records
        .iter()
        .position(|r| r.id == id)
        .ok_or(Error::RecordNotFound { id })?;
    Ok(records.remove(index))
}

/// Whether the form adds a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// "Add New Placement".
    Add,
    /// "Edit Placement" for the given record.
    Edit(RecordId),
}

/// The add/edit placement form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementForm {
    /// Add or edit.
    pub mode: FormMode,
    /// Current field contents.
    pub draft: PlacementDraft,
}

impl PlacementForm {
    /// Dialog title for this form.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Add New Placement",
            FormMode::Edit(_) => "Edit Placement",
        }
    }
}

/// State of the admin dashboard.
#[derive(Debug)]
pub struct AdminDashboard<'a> {
    store: &'a RecordStore,
    placements: Vec<PlacementRecord>,
    form: Option<PlacementForm>,
}

impl<'a> AdminDashboard<'a> {
    /// Load the collection from `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored collection cannot be read.
    pub fn open(store: &'a RecordStore) -> Result<Self> {
        Ok(Self {
            placements: store.load()?,
            store,
            form: None,
        })
    }

    /// All records, in stored order.
    #[must_use]
    pub fn placements(&self) -> &[PlacementRecord] {
        &self.placements
    }

    /// Summary figures over all records.
    #[must_use]
    pub fn stats(&self) -> PlacementStats {
        PlacementStats::compute(&self.placements)
    }

    /// The open form, if any.
    #[must_use]
    pub fn form(&self) -> Option<&PlacementForm> {
        self.form.as_ref()
    }

    /// Mutable access to the open form's fields.
    pub fn draft_mut(&mut self) -> Option<&mut PlacementDraft> {
        self.form.as_mut().map(|f| &mut f.draft)
    }

    /// Open an empty form for a new record.
    pub fn open_new(&mut self) {
        self.form = Some(PlacementForm {
            mode: FormMode::Add,
            draft: PlacementDraft::default(),
        });
    }

    /// Open the form pre-filled with record `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecordNotFound`] if no record has that identifier.
    pub fn begin_edit(&mut self, id: RecordId) -> Result<()> {
        let record = self
            .placements
            .iter()
            .find(|r| r.id == id)
            .ok_or(Error::RecordNotFound { id })?;
        self.form = Some(PlacementForm {
            mode: FormMode::Edit(id),
            draft: PlacementDraft::from(record),
        });
        Ok(())
    }

    /// Close the form, discarding its contents.
    pub fn close_form(&mut self) {
        self.form = None;
    }

    /// Submit the open form.
    ///
    /// On success the record is saved and the form is closed. If the draft
    /// fails the presence check the form stays open with its contents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoOpenForm`] when no form is open, a form error for
    /// blank or unparsable fields, or a storage error.
    pub fn submit(&mut self) -> Result<RecordId> {
        let form = self.form.as_ref().ok_or(Error::NoOpenForm)?;
        let fields = form.draft.parse()?;
        let mode = form.mode;
        let id = match mode {
            FormMode::Add => self.create(fields)?,
            FormMode::Edit(id) => {
                self.update(id, fields)?;
                id
            }
        };
        self.form = None;
        Ok(id)
    }

    /// Create a record stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be saved.
    pub fn create(&mut self, fields: PlacementFields) -> Result<RecordId> {
        self.create_at(fields, Utc::now())
    }

    /// Create a record stamped with `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be saved.
    pub fn create_at(&mut self, fields: PlacementFields, now: DateTime<Utc>) -> Result<RecordId> {
        let mut next = self.placements.clone();
        let id = create_record(&mut next, fields, now);
        self.commit(next)?;
        info!(%id, "Created placement");
        Ok(id)
    }

    /// Replace the fields of record `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecordNotFound`] or a storage error.
    pub fn update(&mut self, id: RecordId, fields: PlacementFields) -> Result<()> {
        let mut next = self.placements.clone();
        update_record(&mut next, id, fields)?;
        self.commit(next)?;
        info!(%id, "Updated placement");
        Ok(())
    }

    /// Delete record `id` and return it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecordNotFound`] or a storage error.
    pub fn delete(&mut self, id: RecordId) -> Result<PlacementRecord> {
        let mut next = self.placements.clone();
        let removed = delete_record(&mut next, id)?;
        self.commit(next)?;
        info!(%id, "Deleted placement");
        Ok(removed)
    }

    fn commit(&mut self, next: Vec<PlacementRecord>) -> Result<()> {
        self.store.save(&next)?;
        self.placements = next;
        Ok(())
    }
}
