//! Form and list controller.
//!
//! [`Controller`] holds everything the record form shows: the five text
//! inputs, the rendered table rows and the current selection. It turns field
//! text into typed values, calls the store, and re-reads the full list after
//! every mutation. It never draws anything, so the desktop window and the
//! command line drive the same logic, and tests need no display.

use std::fmt;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::record::{parse_date, NewAnimal, TableRow};
use crate::storage::RecordStore;

/// One of the five form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The animal's name.
    Name,
    /// Date of birth, day-month-year.
    DateOfBirth,
    /// Weight in kilograms.
    Weight,
    /// Height in metres.
    Height,
    /// Medical condition notes.
    MedicalCondition,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::DateOfBirth,
        Self::Weight,
        Self::Height,
        Self::MedicalCondition,
    ];

    /// The label shown next to this field's input.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::DateOfBirth => "DOB (DD-MM-YYYY)",
            Self::Weight => "Weight (kg)",
            Self::Height => "Height (m)",
            Self::MedicalCondition => "Medical Condition",
        }
    }

    /// Whether Add refuses to run while this field is empty.
    #[must_use]
    pub fn is_required(self) -> bool {
        !matches!(self, Self::MedicalCondition)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The raw text of the five form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    /// Name input.
    pub name: String,
    /// Date of birth input.
    pub date_of_birth: String,
    /// Weight input.
    pub weight: String,
    /// Height input.
    pub height: String,
    /// Medical condition input.
    pub medical_condition: String,
}

impl FormFields {
    /// Borrow the text of one field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::DateOfBirth => &self.date_of_birth,
            Field::Weight => &self.weight,
            Field::Height => &self.height,
            Field::MedicalCondition => &self.medical_condition,
        }
    }

    /// Mutably borrow the text of one field.
    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::DateOfBirth => &mut self.date_of_birth,
            Field::Weight => &mut self.weight,
            Field::Height => &mut self.height,
            Field::MedicalCondition => &mut self.medical_condition,
        }
    }

    /// Empty every field.
    pub fn clear(&mut self) {
        for field in Field::ALL {
            self.get_mut(field).clear();
        }
    }

    /// Turn the field text into a typed animal.
    ///
    /// Required fields are checked for emptiness first, in form order, then
    /// the date and the two measurements are parsed.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first field that is missing or
    /// does not parse.
    pub fn validate(&self) -> Result<NewAnimal> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|field| field.is_required() && self.get(*field).is_empty())
        {
            return Err(Error::MissingField { field });
        }

        let date_of_birth = parse_date(&self.date_of_birth).ok_or_else(|| Error::InvalidDate {
            value: self.date_of_birth.clone(),
        })?;
        let weight_kg = parse_measure(Field::Weight, &self.weight)?;
        let height_m = parse_measure(Field::Height, &self.height)?;

        Ok(NewAnimal {
            name: self.name.clone(),
            date_of_birth,
            weight_kg,
            height_m,
            medical_condition: self.medical_condition.clone(),
        })
    }

    /// Copy a table row's data columns verbatim into the fields.
    fn fill_from(&mut self, row: &TableRow) {
        self.name.clone_from(&row.name);
        self.date_of_birth.clone_from(&row.date_of_birth);
        self.weight.clone_from(&row.weight);
        self.height.clone_from(&row.height);
        self.medical_condition.clone_from(&row.medical_condition);
    }
}

/// Parse a weight or height. Non-finite values cannot be stored as REAL.
fn parse_measure(field: Field, text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| Error::InvalidNumber {
            field,
            value: text.to_string(),
        })
}

/// The two user-visible states of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    /// Fields are empty or hold whatever was last typed.
    #[default]
    Idle,
    /// Fields were filled from the selected table row.
    EditingSelection,
}

/// Mediates between the record form and a [`RecordStore`].
#[derive(Debug)]
pub struct Controller<S> {
    store: S,
    fields: FormFields,
    rows: Vec<TableRow>,
    selected: Option<i64>,
}

impl<S: RecordStore> Controller<S> {
    /// Create a controller, making sure the store's table exists and loading
    /// the current list.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the store cannot be initialized or read.
    pub fn new(store: S) -> Result<Self> {
        store.initialize()?;
        let mut controller = Self {
            store,
            fields: FormFields::default(),
            rows: Vec::new(),
            selected: None,
        };
        controller.refresh()?;
        Ok(controller)
    }

    /// The current field text.
    #[must_use]
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Mutable access to the field text, for the surface to write keystrokes into.
    pub fn fields_mut(&mut self) -> &mut FormFields {
        &mut self.fields
    }

    /// The displayed table rows, in store order.
    #[must_use]
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Identifier of the selected row, if any.
    #[must_use]
    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    /// Index of the selected row within [`Self::rows`], if any.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected?;
        self.rows.iter().position(|row| row.id == id)
    }

    /// Which of the two form states the controller is in.
    #[must_use]
    pub fn state(&self) -> FormState {
        if self.selected.is_some() {
            FormState::EditingSelection
        } else {
            FormState::Idle
        }
    }

    /// Borrow the underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the store, ending the controller's ownership of it.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Handle the Add button.
    ///
    /// On success the fields are cleared, the list is re-read and the form
    /// returns to idle. If validation or the insert fails, nothing changes.
    ///
    /// # Errors
    ///
    /// Returns a validation error for bad input, or a persistence error if
    /// the store rejects the insert. If the insert succeeds but the list
    /// cannot be re-read, returns [`Error::Reload`]: the record is saved and
    /// the fields are cleared, but the displayed rows are out of date.
    pub fn add(&mut self) -> Result<i64> {
        let animal = self.fields.validate()?;
        let id = self.store.create(&animal)?;

        self.fields.clear();
        self.selected = None;
        self.reload_after("added", id)?;
        Ok(id)
    }

    /// Handle the Delete button.
    ///
    /// Deletes the selected record, re-reads the list and clears the fields.
    /// Returns the identifier that was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSelection`] when no row is selected, or a
    /// persistence error if the store rejects the delete; in both cases
    /// nothing changes. If the delete succeeds but the list cannot be
    /// re-read, returns [`Error::Reload`] with the fields and selection
    /// already cleared.
    pub fn delete(&mut self) -> Result<i64> {
        let id = self.selected.ok_or(Error::NoSelection)?;
        self.store.delete_by_id(id)?;

        self.selected = None;
        self.fields.clear();
        self.reload_after("deleted", id)?;
        Ok(id)
    }

    /// Refresh after a write that already reached the store.
    fn reload_after(&mut self, action: &'static str, id: i64) -> Result<()> {
        self.refresh().map_err(|source| Error::Reload {
            action,
            id,
            source: Box::new(source),
        })
    }

    /// Handle a click on the row at `index`.
    ///
    /// Copies the row's five data columns into the fields as displayed,
    /// without re-parsing them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRow`] if `index` is past the end of the list.
    pub fn select_row(&mut self, index: usize) -> Result<()> {
        let row = self.rows.get(index).ok_or(Error::UnknownRow { index })?;
        debug!("Selected row {} (animal {})", index, row.id);

        self.fields.fill_from(row);
        self.selected = Some(row.id);
        Ok(())
    }

    /// Select the displayed row showing record `id`.
    ///
    /// Returns `false`, leaving everything unchanged, if no row shows that record.
    pub fn select_id(&mut self, id: i64) -> bool {
        match self.rows.iter().position(|row| row.id == id) {
            Some(index) => self.select_row(index).is_ok(),
            None => false,
        }
    }

    /// Drop the current selection, leaving the field text alone.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Replace the displayed rows with the store's current list.
    ///
    /// A selection whose record is no longer listed is dropped.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the list cannot be read; the displayed
    /// rows are left as they were.
    pub fn refresh(&mut self) -> Result<()> {
        let records = self.store.list_all()?;
        self.rows = records.iter().map(TableRow::from).collect();

        if let Some(id) = self.selected {
            if !self.rows.iter().any(|row| row.id == id) {
                self.selected = None;
            }
        }

        info!("Showing {} animals", self.rows.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::record::AnimalRecord;
    use crate::storage::Storage;

    fn controller() -> Controller<Storage> {
        Controller::new(Storage::open_in_memory().unwrap()).unwrap()
    }

    fn fill<S: RecordStore>(controller: &mut Controller<S>, values: [&str; 5]) {
        for (field, value) in Field::ALL.into_iter().zip(values) {
            *controller.fields_mut().get_mut(field) = value.to_string();
        }
    }

    fn add<S: RecordStore>(controller: &mut Controller<S>, values: [&str; 5]) -> Result<i64> {
        fill(controller, values);
        controller.add()
    }

    const LEO: [&str; 5] = ["Leo", "15-03-2019", "190.5", "1.1", "none"];
    const NIA: [&str; 5] = ["Nia", "02-07-2021", "85.0", "0.9", ""];

    /// A store whose operations can be switched to fail.
    #[derive(Debug, Default)]
    struct FlakyStore {
        inner: RefCell<Vec<AnimalRecord>>,
        next_id: Cell<i64>,
        failing: Cell<bool>,
    }

    impl FlakyStore {
        fn check(&self) -> Result<()> {
            if self.failing.get() {
                Err(Error::DatabaseQuery(rusqlite::Error::InvalidQuery))
            } else {
                Ok(())
            }
        }
    }

    impl RecordStore for FlakyStore {
        fn initialize(&self) -> Result<()> {
            self.check()
        }

        fn create(&self, animal: &NewAnimal) -> Result<i64> {
            self.check()?;
            let id = self.next_id.get() + 1;
            self.next_id.set(id);
            self.inner.borrow_mut().push(animal.clone().with_id(id));
            Ok(id)
        }

        fn list_all(&self) -> Result<Vec<AnimalRecord>> {
            self.check()?;
            Ok(self.inner.borrow().clone())
        }

        fn delete_by_id(&self, id: i64) -> Result<bool> {
            self.check()?;
            let mut records = self.inner.borrow_mut();
            let before = records.len();
            records.retain(|record| record.id != id);
            Ok(records.len() != before)
        }
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(Field::DateOfBirth.label(), "DOB (DD-MM-YYYY)");
        assert_eq!(Field::Weight.to_string(), "Weight (kg)");
        assert!(!Field::MedicalCondition.is_required());
        assert!(Field::Name.is_required());
    }

    #[test]
    fn test_validate_valid_input() {
        let fields = FormFields {
            name: "Leo".to_string(),
            date_of_birth: "15-03-2019".to_string(),
            weight: "190.5".to_string(),
            height: "1.1".to_string(),
            medical_condition: "none".to_string(),
        };
        let animal = fields.validate().unwrap();
        assert_eq!(animal.name, "Leo");
        assert_eq!(animal.weight_kg, 190.5);
        assert_eq!(animal.height_m, 1.1);
        assert_eq!(
            animal.date_of_birth,
            chrono::NaiveDate::from_ymd_opt(2019, 3, 15).unwrap()
        );
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let fields = FormFields {
            name: "Leo".to_string(),
            date_of_birth: "15-03-2019".to_string(),
            ..FormFields::default()
        };
        let err = fields.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::MissingField {
                field: Field::Weight
            }
        ));
    }

    #[test]
    fn test_validate_whitespace_name_is_not_empty() {
        let fields = FormFields {
            name: "   ".to_string(),
            date_of_birth: "15-03-2019".to_string(),
            weight: "1".to_string(),
            height: "1".to_string(),
            medical_condition: String::new(),
        };
        assert_eq!(fields.validate().unwrap().name, "   ");
    }

    #[test]
    fn test_validate_whitespace_weight_is_invalid_number() {
        let fields = FormFields {
            name: "Leo".to_string(),
            date_of_birth: "15-03-2019".to_string(),
            weight: " ".to_string(),
            height: "1".to_string(),
            medical_condition: String::new(),
        };
        assert!(matches!(
            fields.validate().unwrap_err(),
            Error::InvalidNumber {
                field: Field::Weight,
                ..
            }
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite_numbers() {
        for bad in ["NaN", "inf", "-infinity", "heavy", "1,5"] {
            let fields = FormFields {
                name: "Leo".to_string(),
                date_of_birth: "15-03-2019".to_string(),
                weight: bad.to_string(),
                height: "1.0".to_string(),
                medical_condition: String::new(),
            };
            assert!(
                matches!(
                    fields.validate().unwrap_err(),
                    Error::InvalidNumber {
                        field: Field::Weight,
                        ..
                    }
                ),
                "accepted weight {bad:?}"
            );
        }
    }

    #[test]
    fn test_new_controller_loads_existing_rows() {
        let storage = Storage::open_in_memory().unwrap();
        storage
            .create(&FormFields {
                name: "Leo".to_string(),
                date_of_birth: "15-03-2019".to_string(),
                weight: "190.5".to_string(),
                height: "1.1".to_string(),
                medical_condition: String::new(),
            }
            .validate()
            .unwrap())
            .unwrap();

        let controller = Controller::new(storage).unwrap();
        assert_eq!(controller.rows().len(), 1);
        assert_eq!(controller.state(), FormState::Idle);
    }

    #[test]
    fn test_add_then_list_scenario() {
        let mut controller = controller();

        let leo_id = add(&mut controller, LEO).unwrap();
        assert_eq!(leo_id, 1);
        assert_eq!(controller.rows().len(), 1);
        assert_eq!(
            controller.rows()[0].cells(),
            ["1", "Leo", "15-03-2019", "190.5", "1.1", "none"].map(String::from)
        );
        assert_eq!(controller.fields(), &FormFields::default());

        let nia_id = add(&mut controller, NIA).unwrap();
        assert_eq!(nia_id, 2);
        let ids: Vec<i64> = controller.rows().iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(
            controller.rows()[1].cells(),
            ["2", "Nia", "02-07-2021", "85.0", "0.9", ""].map(String::from)
        );

        assert!(controller.select_id(1));
        assert_eq!(controller.delete().unwrap(), 1);
        assert_eq!(controller.rows().len(), 1);
        assert_eq!(controller.rows()[0].name, "Nia");
        assert_eq!(controller.state(), FormState::Idle);
    }

    #[test]
    fn test_add_with_missing_field_changes_nothing() {
        let mut controller = controller();
        add(&mut controller, LEO).unwrap();

        for blank in 0..4 {
            let mut values = NIA;
            values[blank] = "";
            let err = add(&mut controller, values).unwrap_err();
            assert!(err.is_validation_error());
            assert_eq!(controller.rows().len(), 1);
            assert_eq!(controller.store().count().unwrap(), 1);
        }
    }

    #[test]
    fn test_add_with_malformed_date_changes_nothing() {
        let mut controller = controller();
        let mut values = LEO;
        values[1] = "31-13-2024";

        let err = add(&mut controller, values).unwrap_err();
        assert!(matches!(err, Error::InvalidDate { .. }));
        assert!(controller.rows().is_empty());
        assert_eq!(controller.fields().date_of_birth, "31-13-2024");
    }

    #[test]
    fn test_add_with_bad_height_changes_nothing() {
        let mut controller = controller();
        let mut values = LEO;
        values[3] = "tall";

        let err = add(&mut controller, values).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidNumber {
                field: Field::Height,
                ..
            }
        ));
        assert_eq!(controller.store().count().unwrap(), 0);
    }

    #[test]
    fn test_add_allows_empty_medical_condition() {
        let mut controller = controller();
        add(&mut controller, NIA).unwrap();
        assert_eq!(controller.rows()[0].medical_condition, "");
    }

    #[test]
    fn test_delete_without_selection() {
        let mut controller = controller();
        add(&mut controller, LEO).unwrap();

        let err = controller.delete().unwrap_err();
        assert!(err.is_selection_error());
        assert_eq!(controller.rows().len(), 1);
    }

    #[test]
    fn test_delete_leaves_other_records() {
        let mut controller = controller();
        add(&mut controller, LEO).unwrap();
        add(&mut controller, NIA).unwrap();
        let mut third = LEO;
        third[0] = "Kito";
        add(&mut controller, third).unwrap();

        controller.select_row(1).unwrap();
        assert_eq!(controller.delete().unwrap(), 2);

        let names: Vec<&str> = controller.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Leo", "Kito"]);
        assert_eq!(controller.fields(), &FormFields::default());
        assert!(controller.selected().is_none());
    }

    #[test]
    fn test_delete_of_vanished_record_is_noop() {
        let mut controller = controller();
        add(&mut controller, LEO).unwrap();
        add(&mut controller, NIA).unwrap();
        controller.select_id(1);

        controller.store().delete_by_id(1).unwrap();
        assert_eq!(controller.delete().unwrap(), 1);
        assert_eq!(controller.rows().len(), 1);
        assert_eq!(controller.rows()[0].name, "Nia");
    }

    #[test]
    fn test_select_row_copies_displayed_values() {
        let mut controller = controller();
        add(&mut controller, LEO).unwrap();
        add(&mut controller, NIA).unwrap();

        controller.select_row(1).unwrap();

        let fields = controller.fields();
        assert_eq!(fields.name, "Nia");
        assert_eq!(fields.date_of_birth, "02-07-2021");
        assert_eq!(fields.weight, "85.0");
        assert_eq!(fields.height, "0.9");
        assert_eq!(fields.medical_condition, "");
        assert_eq!(controller.selected(), Some(2));
        assert_eq!(controller.selected_index(), Some(1));
        assert_eq!(controller.state(), FormState::EditingSelection);
    }

    #[test]
    fn test_select_row_out_of_range() {
        let mut controller = controller();
        add(&mut controller, LEO).unwrap();

        let err = controller.select_row(5).unwrap_err();
        assert!(matches!(err, Error::UnknownRow { index: 5 }));
        assert!(controller.selected().is_none());
        assert_eq!(controller.fields(), &FormFields::default());
    }

    #[test]
    fn test_select_id_unknown() {
        let mut controller = controller();
        assert!(!controller.select_id(9));
        assert_eq!(controller.state(), FormState::Idle);
    }

    #[test]
    fn test_add_from_selection_keeps_old_row() {
        let mut controller = controller();
        add(&mut controller, LEO).unwrap();

        controller.select_row(0).unwrap();
        controller.fields_mut().weight = "200.0".to_string();
        let new_id = controller.add().unwrap();

        assert_eq!(new_id, 2);
        assert_eq!(controller.rows().len(), 2);
        assert_eq!(controller.rows()[0].weight, "190.5");
        assert_eq!(controller.rows()[1].weight, "200.0");
        assert_eq!(controller.state(), FormState::Idle);
    }

    #[test]
    fn test_clear_selection() {
        let mut controller = controller();
        add(&mut controller, LEO).unwrap();
        controller.select_row(0).unwrap();

        controller.clear_selection();
        assert_eq!(controller.state(), FormState::Idle);
        assert_eq!(controller.fields().name, "Leo");
    }

    #[test]
    fn test_persistence_error_is_recoverable() {
        let mut controller = Controller::new(FlakyStore::default()).unwrap();
        add(&mut controller, LEO).unwrap();

        controller.store().failing.set(true);
        let err = add(&mut controller, NIA).unwrap_err();
        assert!(err.is_persistence_error());
        assert_eq!(controller.fields().name, "Nia");
        assert_eq!(controller.rows().len(), 1);

        controller.select_row(0).unwrap();
        let err = controller.delete().unwrap_err();
        assert!(err.is_persistence_error());
        assert_eq!(controller.selected(), Some(1));

        controller.store().failing.set(false);
        assert_eq!(controller.delete().unwrap(), 1);
        assert!(controller.rows().is_empty());
    }

    /// A store that accepts writes but cannot list once `list_fails` is set.
    #[derive(Debug, Default)]
    struct UnlistableStore {
        records: FlakyStore,
        list_fails: Cell<bool>,
    }

    impl RecordStore for UnlistableStore {
        fn initialize(&self) -> Result<()> {
            self.records.initialize()
        }

        fn create(&self, animal: &NewAnimal) -> Result<i64> {
            self.records.create(animal)
        }

        fn list_all(&self) -> Result<Vec<AnimalRecord>> {
            if self.list_fails.get() {
                return Err(Error::DatabaseQuery(rusqlite::Error::InvalidQuery));
            }
            self.records.list_all()
        }

        fn delete_by_id(&self, id: i64) -> Result<bool> {
            self.records.delete_by_id(id)
        }
    }

    #[test]
    fn test_add_saved_but_reload_failed() {
        let mut controller = Controller::new(UnlistableStore::default()).unwrap();
        controller.store().list_fails.set(true);

        let err = add(&mut controller, LEO).unwrap_err();

        assert!(matches!(
            err,
            Error::Reload {
                action: "added",
                id: 1,
                ..
            }
        ));
        assert!(err.is_persistence_error());
        assert!(!err.is_validation_error());
        assert!(err.to_string().contains("was added"));
        assert_eq!(controller.store().records.inner.borrow().len(), 1);
        assert_eq!(controller.fields(), &FormFields::default());

        controller.store().list_fails.set(false);
        controller.refresh().unwrap();
        assert_eq!(controller.rows().len(), 1);
        assert_eq!(controller.rows()[0].name, "Leo");
    }

    #[test]
    fn test_delete_saved_but_reload_failed() {
        let mut controller = Controller::new(UnlistableStore::default()).unwrap();
        add(&mut controller, LEO).unwrap();
        add(&mut controller, NIA).unwrap();
        controller.select_row(0).unwrap();
        controller.store().list_fails.set(true);

        let err = controller.delete().unwrap_err();

        assert!(matches!(
            err,
            Error::Reload {
                action: "deleted",
                id: 1,
                ..
            }
        ));
        assert_eq!(controller.store().records.inner.borrow().len(), 1);
        assert!(controller.selected().is_none());
        assert_eq!(controller.fields(), &FormFields::default());

        controller.store().list_fails.set(false);
        controller.refresh().unwrap();
        assert_eq!(controller.rows().len(), 1);
        assert_eq!(controller.rows()[0].name, "Nia");
    }

    #[test]
    fn test_new_fails_when_store_unavailable() {
        let store = FlakyStore::default();
        store.failing.set(true);
        let err = Controller::new(store).unwrap_err();
        assert!(err.is_persistence_error());
    }

    #[test]
    fn test_into_store() {
        let mut controller = controller();
        add(&mut controller, LEO).unwrap();
        let storage = controller.into_store();
        assert_eq!(storage.count().unwrap(), 1);
    }
}
