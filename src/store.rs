//! Resource State
//!
//! Reactive wrappers around the sync core: each page owns its lists and
//! forms as signals, and responses are applied with `try_update` so a page
//! that was closed mid-request simply drops them.

use leptos::prelude::*;
use leptos::task::spawn_local;

use catalog_sync::{FormBinding, FormModel, ListController, RecordId, Resource, SubmitOutcome};

use crate::context::AppContext;

/// A resource collection that refetches every time its refresh token moves.
pub fn use_resource_list<R>(ctx: AppContext) -> RwSignal<ListController<R>>
where
    R: Resource + Send + Sync + 'static,
{
    let list = RwSignal::new(ListController::<R>::new());
    // Loads touch the list too, so only the token itself is tracked
    let token = Memo::new(move |_| list.with(|l| l.refresh_token()));

    Effect::new(move |_| {
        let token = token.get();
        let Some(ticket) = list.try_update(|l| l.begin_load()) else {
            return;
        };
        log::debug!("[STORE] {} load #{} (token {})", R::PATH, ticket.seq(), token.value());
        let client = ctx.client::<R>();
        spawn_local(async move {
            let result = client.list().await;
            ctx.notify(|notices| list.try_update(|l| l.finish_load(ticket, result, notices)));
        });
    });

    list
}

/// Validates and sends a form, then hands the outcome to `after`.
pub fn submit_form<M>(
    ctx: AppContext,
    form: RwSignal<FormBinding<M>>,
    list: RwSignal<ListController<M::Record>>,
    after: impl FnOnce(SubmitOutcome) + 'static,
) where
    M: FormModel + Send + Sync + 'static,
    M::Record: Send + Sync + 'static,
{
    let submission = ctx
        .notify(|notices| form.try_update(|f| f.prepare_submit(notices)))
        .flatten()
        .flatten();
    let Some(submission) = submission else {
        return;
    };
    let client = ctx.client::<M::Record>();
    spawn_local(async move {
        let result = submission.send(&client).await;
        let outcome = ctx
            .notify(|notices| {
                form.try_update(|f| {
                    list.try_update(|l| f.finish_submit(&submission.mode, result, l, notices))
                })
            })
            .flatten()
            .flatten();
        if let Some(outcome) = outcome {
            after(outcome);
        }
    });
}

/// Deletes `id` and refreshes the list on success.
pub fn delete_record<R>(ctx: AppContext, list: RwSignal<ListController<R>>, id: RecordId)
where
    R: Resource + Send + Sync + 'static,
{
    let client = ctx.client::<R>();
    spawn_local(async move {
        let result = client.delete(&id).await;
        ctx.notify(|notices| list.try_update(|l| l.apply_mutation(result, notices)));
    });
}
