//! Production entry form session

use crate::{ClientResult, HttpClient};
use shared::{
    ApiAck, ValidationError,
    document::next_number,
    entry::{ProductionLineItem, ProductionSave, Row, StagingBuffer, num_or_zero},
    models::{Item, Machine, Operator},
};

/// Transient inputs for the next production line item. Cleared after each
/// successful add; the item/machine selections are not.
#[derive(Debug, Clone, Default)]
pub struct ProductionInputs {
    pub length: String,
    pub weight: String,
    pub remarks: String,
}

/// Production entry form session.
///
/// Owns the staging buffer for one open form. The buffer starts empty and
/// is cleared only when a submission succeeds; validation failures, network
/// errors and server rejections all leave it untouched so the user can
/// retry.
#[derive(Debug, Clone)]
pub struct ProductionSession {
    number: String,
    date: String,
    shift: String,
    operators: Vec<Operator>,
    machines: Vec<Machine>,
    items: Vec<Item>,
    selected_operator: Option<i64>,
    selected_item: Option<i64>,
    selected_machine: Option<i64>,
    inputs: ProductionInputs,
    buffer: StagingBuffer<ProductionLineItem>,
}

impl ProductionSession {
    /// Open a fresh form with the given document number, entry date and
    /// master-data selector options.
    pub fn new(
        number: impl Into<String>,
        date: impl Into<String>,
        operators: Vec<Operator>,
        machines: Vec<Machine>,
        items: Vec<Item>,
    ) -> Self {
        Self {
            number: number.into(),
            date: date.into(),
            shift: String::new(),
            operators,
            machines,
            items,
            selected_operator: None,
            selected_item: None,
            selected_machine: None,
            inputs: ProductionInputs::default(),
            buffer: StagingBuffer::new(),
        }
    }

    /// Current document number (`DP…` series)
    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn set_shift(&mut self, shift: impl Into<String>) {
        self.shift = shift.into();
    }

    pub fn select_operator(&mut self, id: Option<i64>) {
        self.selected_operator = id;
    }

    pub fn select_item(&mut self, id: Option<i64>) {
        self.selected_item = id;
    }

    pub fn select_machine(&mut self, id: Option<i64>) {
        self.selected_machine = id;
    }

    pub fn set_length(&mut self, value: impl Into<String>) {
        self.inputs.length = value.into();
    }

    pub fn set_weight(&mut self, value: impl Into<String>) {
        self.inputs.weight = value.into();
    }

    pub fn set_remarks(&mut self, value: impl Into<String>) {
        self.inputs.remarks = value.into();
    }

    pub fn inputs(&self) -> &ProductionInputs {
        &self.inputs
    }

    /// Stage a line item from the current selections and inputs.
    ///
    /// Both an item and a machine must be selected; otherwise the add is
    /// rejected and nothing changes. Blank or unparseable numeric inputs
    /// are staged as zero. On success the numeric/remarks inputs are
    /// cleared, the selections kept.
    pub fn add_item(&mut self) -> Result<(), ValidationError> {
        let (Some(item_id), Some(machine_id)) = (self.selected_item, self.selected_machine) else {
            return Err(ValidationError::ItemAndMachineRequired);
        };

        let item_name = self
            .items
            .iter()
            .find(|i| i.id == item_id)
            .map(|i| i.name.clone())
            .ok_or(ValidationError::ItemAndMachineRequired)?;
        let machine_name = self
            .machines
            .iter()
            .find(|m| m.id == machine_id)
            .map(|m| m.name.clone())
            .ok_or(ValidationError::ItemAndMachineRequired)?;

        self.buffer.push(ProductionLineItem {
            item_id,
            item_name,
            machine_id,
            machine_name,
            length: num_or_zero(&self.inputs.length),
            weight: num_or_zero(&self.inputs.weight),
            remarks: std::mem::take(&mut self.inputs.remarks),
        });
        self.inputs.length.clear();
        self.inputs.weight.clear();

        tracing::debug!(staged = self.buffer.len(), "staged production item");
        Ok(())
    }

    /// Remove the staged item at the given display position
    pub fn remove_item(&mut self, index: usize) {
        self.buffer.remove(index);
    }

    /// Display rows for the staged-items table, in insertion order
    pub fn rows(&self) -> impl Iterator<Item = Row<'_, ProductionLineItem>> {
        self.buffer.rows()
    }

    /// Staged line items in submission order
    pub fn staged(&self) -> &[ProductionLineItem] {
        self.buffer.items()
    }

    /// Build the save request from the current form state.
    ///
    /// Requires at least one staged item and an operator selection.
    pub fn payload(&self) -> Result<ProductionSave, ValidationError> {
        if self.buffer.is_empty() {
            return Err(ValidationError::NoProductionItems);
        }
        let operator_id = self
            .selected_operator
            .ok_or(ValidationError::OperatorRequired)?;

        Ok(ProductionSave {
            number: self.number.clone(),
            date: self.date.clone(),
            shift: self.shift.clone(),
            operator_id,
            items: self.buffer.items().to_vec(),
        })
    }

    /// Submit the staged batch.
    ///
    /// On success the form rolls over to the next document; on any failure
    /// the staged items and inputs are left untouched for resubmission.
    pub async fn submit(&mut self, client: &HttpClient) -> ClientResult<ApiAck> {
        let save = self.payload()?;
        let ack = client.save_production(&save).await?;
        tracing::info!(number = %save.number, items = save.items.len(), "production saved");
        self.roll_over();
        Ok(ack)
    }

    /// Reset the form for the next entry after a successful save: empty the
    /// buffer, clear inputs and selections, advance the document number.
    pub fn roll_over(&mut self) {
        self.buffer.clear();
        self.inputs = ProductionInputs::default();
        self.shift.clear();
        self.selected_operator = None;
        self.selected_item = None;
        self.selected_machine = None;
        self.number = next_number(&self.number);
    }

    /// Selector options, as rendered into the form
    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }
}
