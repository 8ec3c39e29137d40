use careerflow_logging::flow_debug;

use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects: Vec<Effect> = match msg {
        Msg::Initialize => state.fetch.begin(&mut state.store).into_iter().collect(),
        Msg::QueryChanged(query) => {
            if state.criteria.query != query {
                state.criteria.query = query;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::StatusFilterChanged(status) => {
            if state.criteria.status != status {
                state.criteria.status = status;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CompanyChanged(company) => {
            state.create.set_company(company);
            state.mark_dirty();
            Vec::new()
        }
        Msg::TitleChanged(title) => {
            state.create.set_title(title);
            state.mark_dirty();
            Vec::new()
        }
        Msg::NewStatusChanged(status) => {
            state.create.set_status(status);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SubmitClicked => {
            if state.torn_down {
                flow_debug!("Ignoring submit after teardown");
                Vec::new()
            } else {
                state.create.submit(&mut state.store).into_iter().collect()
            }
        }
        Msg::JobsLoaded(result) => {
            if state.torn_down {
                flow_debug!("Ignoring list result after teardown");
            } else {
                state.fetch.complete(&mut state.store, result);
            }
            Vec::new()
        }
        Msg::JobCreated(result) => {
            if state.torn_down {
                flow_debug!("Ignoring create result after teardown");
            } else {
                state.create.complete(&mut state.store, result);
            }
            Vec::new()
        }
        Msg::Teardown => {
            state.torn_down = true;
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
