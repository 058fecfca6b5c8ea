//! Edit Session
//!
//! At most one record is being edited at a time. The session owns that
//! selection and the visibility of the edit surface, and keeps the edit
//! form in step with both.

use crate::client::Mutation;
use crate::error::ClientError;
use crate::form::{FormBinding, FormModel, SubmitOutcome};
use crate::list::ListController;
use crate::notify::NotificationSink;
use crate::record::{RecordId, Resource};

#[derive(Debug, Clone)]
pub struct EditSession<R> {
    selection: Option<R>,
    visible: bool,
}

impl<R> Default for EditSession<R> {
    fn default() -> Self {
        Self {
            selection: None,
            visible: false,
        }
    }
}

impl<R: Resource> EditSession<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Option<&R> {
        self.selection.as_ref()
    }

    pub fn selected_id(&self) -> Option<&RecordId> {
        self.selection.as_ref().map(|record| record.id())
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Selects `record`, shows the edit surface and binds the form to it.
    pub fn open<M: FormModel<Record = R>>(&mut self, record: R, form: &mut FormBinding<M>) {
        form.bind_record(&record);
        self.selection = Some(record);
        self.visible = true;
    }

    /// Clears the selection, hides the surface and resets the form.
    pub fn close<M: FormModel<Record = R>>(&mut self, form: &mut FormBinding<M>) {
        self.selection = None;
        self.visible = false;
        form.bind_draft();
    }

    /// Swaps in a freshly fetched copy of the selected record. The form is
    /// rebound only if the user hasn't changed anything yet. Returns false
    /// when the session has since moved on to another record or closed.
    pub fn refresh_selection<M: FormModel<Record = R>>(
        &mut self,
        fresh: R,
        form: &mut FormBinding<M>,
    ) -> bool {
        let Some(current) = self.selection.as_ref() else {
            return false;
        };
        if current.id() != fresh.id() || !self.visible {
            return false;
        }
        if form.values() == &M::from_record(current) {
            form.bind_record(&fresh);
        }
        self.selection = Some(fresh);
        true
    }

    /// Closes the surface once an update went through.
    pub fn finish_save<M: FormModel<Record = R>>(
        &mut self,
        outcome: &SubmitOutcome,
        form: &mut FormBinding<M>,
    ) {
        if let SubmitOutcome::Updated(id) = outcome {
            if self.selected_id() == Some(id) {
                self.close(form);
            }
        }
    }

    /// Applies the answer to a confirmed delete of `id`. Success refreshes
    /// the list and, if `id` was being edited, closes the session.
    pub fn finish_delete<M: FormModel<Record = R>>(
        &mut self,
        id: &RecordId,
        result: Result<Mutation<R>, ClientError>,
        list: &mut ListController<R>,
        sink: &mut impl NotificationSink,
        form: &mut FormBinding<M>,
    ) -> bool {
        let deleted = list.apply_mutation(result, sink);
        if deleted && self.selected_id() == Some(id) {
            self.close(form);
        }
        deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::ProductFields;
    use crate::form::FormMode;
    use crate::notify::Notifications;
    use crate::record::Product;

    fn product(id: i64, price: f64) -> Product {
        Product {
            id: RecordId::Int(id),
            name: format!("Product {}", id),
            price,
            discount: 0.0,
            stock: None,
            description: None,
            category_id: None,
            supplier_id: None,
            category: None,
            supplier: None,
        }
    }

    #[test]
    fn test_open_and_close() {
        let mut session = EditSession::new();
        let mut form = FormBinding::<ProductFields>::new();

        session.open(product(1, 100.0), &mut form);
        assert!(session.is_visible());
        assert_eq!(session.selected_id(), Some(&RecordId::Int(1)));
        assert_eq!(form.mode(), &FormMode::Edit(RecordId::Int(1)));
        assert_eq!(form.values().price, "100");

        session.close(&mut form);
        assert!(!session.is_visible());
        assert!(session.selection().is_none());
        assert_eq!(form.mode(), &FormMode::Create);
        assert_eq!(form.values(), &ProductFields::default());
    }

    #[test]
    fn test_refresh_selection_keeps_user_edits() {
        let mut session = EditSession::new();
        let mut form = FormBinding::<ProductFields>::new();

        session.open(product(1, 100.0), &mut form);
        assert!(session.refresh_selection(product(1, 120.0), &mut form));
        assert_eq!(form.values().price, "120");

        form.values_mut().price = "150".to_string();
        assert!(session.refresh_selection(product(1, 130.0), &mut form));
        assert_eq!(form.values().price, "150");
        assert_eq!(session.selection().map(|p| p.price), Some(130.0));
    }

    #[test]
    fn test_refresh_selection_ignores_other_records() {
        let mut session = EditSession::new();
        let mut form = FormBinding::<ProductFields>::new();

        session.open(product(1, 100.0), &mut form);
        assert!(!session.refresh_selection(product(2, 5.0), &mut form));
        session.close(&mut form);
        assert!(!session.refresh_selection(product(1, 5.0), &mut form));
        assert_eq!(form.values(), &ProductFields::default());
    }

    #[test]
    fn test_delete_of_selected_record_closes_session() {
        let mut session = EditSession::new();
        let mut form = FormBinding::<ProductFields>::new();
        let mut list = ListController::<Product>::new();
        let mut notices = Notifications::new();

        session.open(product(1, 100.0), &mut form);
        let id = RecordId::Int(1);
        let deleted = session.finish_delete(
            &id,
            Ok(Mutation { message: "Deleted".into(), item: None }),
            &mut list,
            &mut notices,
            &mut form,
        );

        assert!(deleted);
        assert!(!session.is_visible());
        assert_eq!(list.refresh_token().value(), 1);
    }

    #[test]
    fn test_failed_delete_keeps_session() {
        let mut session = EditSession::new();
        let mut form = FormBinding::<ProductFields>::new();
        let mut list = ListController::<Product>::new();
        let mut notices = Notifications::new();

        session.open(product(1, 100.0), &mut form);
        let id = RecordId::Int(1);
        let deleted = session.finish_delete(
            &id,
            Err(ClientError::transport("offline")),
            &mut list,
            &mut notices,
            &mut form,
        );

        assert!(!deleted);
        assert!(session.is_visible());
        assert_eq!(notices.errors().collect::<Vec<_>>(), vec!["offline"]);
    }
}
