//! The root component

use sprout_ui::core::{next_component_id, Component, ComponentId, Context, Event, Node};
use sprout_ui::widgets::Heading;

use crate::components::{GoalList, NewGoalForm};
use crate::store::GoalStore;

/// Root coordinator: owns the store, wires the form to it, and lays out
/// the page.
///
/// Data goes down: the list gets a snapshot of the goals on every
/// render. Events come up: the form calls the callback built here, the
/// callback appends to the store, and the store's subscription (wired in
/// `mounted`) asks the runtime for a re-render. The children never see
/// the store itself.
pub struct GoalApp {
    id: ComponentId,
    heading: Heading,
    form: NewGoalForm,
    store: GoalStore,
}

impl GoalApp {
    pub fn new(store: GoalStore) -> Self {
        let sink = store.clone();
        let form = NewGoalForm::new(move |goal| {
            if let Err(err) = sink.append(goal) {
                tracing::warn!(%err, "dropping rejected goal");
            }
        });

        Self {
            id: next_component_id(),
            heading: Heading::new("Course Goals"),
            form,
            store,
        }
    }

    pub fn store(&self) -> &GoalStore {
        &self.store
    }
}

impl Component for GoalApp {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn render(&self, ctx: &mut Context) -> Node {
        let goals = self.store.goals();
        Node::column(vec![
            self.heading.render(ctx),
            self.form.render(ctx),
            GoalList::view(&goals, ctx),
        ])
    }

    fn on_event(&mut self, event: &Event, ctx: &mut Context) -> bool {
        self.form.on_event(event, ctx)
    }

    fn mounted(&mut self, ctx: &mut Context) {
        let handle = ctx.render_handle();
        self.store.subscribe(move || handle.request_render());
    }
}
