//! Sale entry form session

use crate::{ClientResult, HttpClient};
use shared::{
    ApiAck, ValidationError,
    document::next_number,
    entry::{Row, SaleLineItem, SaleSave, StagingBuffer, format_amount, num_or_zero},
    models::{Item, Party},
};

/// Transient inputs for the next sale line item. Cleared after each
/// successful add; the item selection is not.
#[derive(Debug, Clone, Default)]
pub struct SaleInputs {
    pub quantity: String,
    pub rate: String,
    /// Rewritten with `quantity × rate` whenever quantity or rate change;
    /// the user may still overwrite it before adding the item.
    pub amount: String,
    pub remarks: String,
}

/// Sale entry form session.
///
/// Owns the staging buffer for one open sale order form; same lifecycle as
/// the production session.
#[derive(Debug, Clone)]
pub struct SaleSession {
    order_no: String,
    date: String,
    parties: Vec<Party>,
    items: Vec<Item>,
    selected_party: Option<i64>,
    selected_item: Option<i64>,
    inputs: SaleInputs,
    buffer: StagingBuffer<SaleLineItem>,
}

impl SaleSession {
    /// Open a fresh form with the given order number, entry date and
    /// master-data selector options.
    pub fn new(
        order_no: impl Into<String>,
        date: impl Into<String>,
        parties: Vec<Party>,
        items: Vec<Item>,
    ) -> Self {
        Self {
            order_no: order_no.into(),
            date: date.into(),
            parties,
            items,
            selected_party: None,
            selected_item: None,
            inputs: SaleInputs::default(),
            buffer: StagingBuffer::new(),
        }
    }

    /// Current order number (`JOB…` series)
    pub fn order_no(&self) -> &str {
        &self.order_no
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn select_party(&mut self, id: Option<i64>) {
        self.selected_party = id;
    }

    pub fn select_item(&mut self, id: Option<i64>) {
        self.selected_item = id;
    }

    /// Set the quantity input and recompute the amount field
    pub fn set_quantity(&mut self, value: impl Into<String>) {
        self.inputs.quantity = value.into();
        self.recompute_amount();
    }

    /// Set the rate input and recompute the amount field
    pub fn set_rate(&mut self, value: impl Into<String>) {
        self.inputs.rate = value.into();
        self.recompute_amount();
    }

    /// Overwrite the amount field, taking precedence over the derived value
    pub fn set_amount(&mut self, value: impl Into<String>) {
        self.inputs.amount = value.into();
    }

    pub fn set_remarks(&mut self, value: impl Into<String>) {
        self.inputs.remarks = value.into();
    }

    pub fn inputs(&self) -> &SaleInputs {
        &self.inputs
    }

    fn recompute_amount(&mut self) {
        let quantity = num_or_zero(&self.inputs.quantity);
        let rate = num_or_zero(&self.inputs.rate);
        self.inputs.amount = format_amount(quantity, rate);
    }

    /// Stage a line item from the current selection and inputs.
    ///
    /// An item must be selected; otherwise the add is rejected and nothing
    /// changes. On success all four inputs are cleared, the selection kept.
    pub fn add_item(&mut self) -> Result<(), ValidationError> {
        let item_id = self.selected_item.ok_or(ValidationError::ItemRequired)?;
        let item_name = self
            .items
            .iter()
            .find(|i| i.id == item_id)
            .map(|i| i.name.clone())
            .ok_or(ValidationError::ItemRequired)?;

        self.buffer.push(SaleLineItem {
            item_id,
            item_name,
            quantity: num_or_zero(&self.inputs.quantity),
            rate: num_or_zero(&self.inputs.rate),
            amount: num_or_zero(&self.inputs.amount),
            remarks: std::mem::take(&mut self.inputs.remarks),
        });
        self.inputs.quantity.clear();
        self.inputs.rate.clear();
        self.inputs.amount.clear();

        tracing::debug!(staged = self.buffer.len(), "staged sale item");
        Ok(())
    }

    /// Remove the staged item at the given display position
    pub fn remove_item(&mut self, index: usize) {
        self.buffer.remove(index);
    }

    /// Display rows for the staged-items table, in insertion order
    pub fn rows(&self) -> impl Iterator<Item = Row<'_, SaleLineItem>> {
        self.buffer.rows()
    }

    /// Staged line items in submission order
    pub fn staged(&self) -> &[SaleLineItem] {
        self.buffer.items()
    }

    /// Build the save request from the current form state.
    ///
    /// Requires at least one staged item and a party selection.
    pub fn payload(&self) -> Result<SaleSave, ValidationError> {
        if self.buffer.is_empty() {
            return Err(ValidationError::NoSaleItems);
        }
        let party_id = self.selected_party.ok_or(ValidationError::PartyRequired)?;

        Ok(SaleSave {
            order_no: self.order_no.clone(),
            date: self.date.clone(),
            party_id,
            items: self.buffer.items().to_vec(),
        })
    }

    /// Submit the staged batch.
    ///
    /// On success the form rolls over to the next order number; on any
    /// failure the staged items and inputs are left untouched for
    /// resubmission.
    pub async fn submit(&mut self, client: &HttpClient) -> ClientResult<ApiAck> {
        let save = self.payload()?;
        let ack = client.save_sale(&save).await?;
        tracing::info!(order_no = %save.order_no, items = save.items.len(), "sale saved");
        self.roll_over();
        Ok(ack)
    }

    /// Reset the form for the next entry after a successful save: empty the
    /// buffer, clear inputs and selections, advance the order number.
    pub fn roll_over(&mut self) {
        self.buffer.clear();
        self.inputs = SaleInputs::default();
        self.selected_party = None;
        self.selected_item = None;
        self.order_no = next_number(&self.order_no);
    }

    /// Selector options, as rendered into the form
    pub fn parties(&self) -> &[Party] {
        &self.parties
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }
}
