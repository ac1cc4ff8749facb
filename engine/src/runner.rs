//! The fixed demo sequence.
//!
//! ```text
//! init -> squares -> double evens -> split head -> set/map -> node list
//!      -> simulated fetch -> broken parse (+cleanup) -> STOPPED
//! ```
//!
//! Each step reports through the [`Console`]; nothing else is touched.

use std::sync::Arc;

use anyhow::Result;
use indexmap::{IndexMap, IndexSet};
use serde_json::{Value, json};

use specimen_config::RunSettings;
use specimen_types::{Node, NodeFields, NodeList, ParseError, Response, State, parse_structured};

use crate::console::{Console, render};
use crate::fetch::fake_api_call;
use crate::sequence::{Squared, double_evens, split_head, squares, squares_by_member, unique};

/// Text the parse step feeds to the structured-data parser. Never valid.
pub const MALFORMED_INPUT: &str = "{ broken json ";

/// Arguments the binary passes to [`Runner::run`].
pub const DEFAULT_ARGS: [&str; 3] = ["foo", "bar", "42"];

/// Emits a line when dropped, so it runs on every exit path of the owning scope.
struct Cleanup<'a> {
    console: &'a dyn Console,
    text: &'static str,
}

impl<'a> Cleanup<'a> {
    fn new(console: &'a dyn Console, text: &'static str) -> Self {
        Self { console, text }
    }
}

impl Drop for Cleanup<'_> {
    fn drop(&mut self) {
        self.console.emit(self.text);
    }
}

/// Parse `input`, logging any failure. `cleanup done` is always emitted last.
pub fn attempt_parse(console: &dyn Console, input: &str) -> Result<Value, ParseError> {
    let _cleanup = Cleanup::new(console, "cleanup done");
    parse_structured(input).inspect_err(|err| {
        tracing::debug!(line = err.line(), column = err.column(), "structured parse failed");
        console.emit(&format!("caught error: {}", err.message()));
    })
}

/// Everything one run produced, for callers that want more than the final state.
#[derive(Debug)]
pub struct RunReport {
    pub state: State,
    pub doubled: Vec<i64>,
    pub first: Option<i64>,
    pub rest: Vec<i64>,
    pub members: IndexSet<i64>,
    pub squared: IndexMap<i64, Squared>,
    pub nodes: NodeList,
    pub response: Response,
    pub parse_error: Option<ParseError>,
}

pub struct Runner {
    settings: RunSettings,
    console: Arc<dyn Console>,
}

impl Runner {
    pub fn new(settings: RunSettings, console: Arc<dyn Console>) -> Self {
        Self { settings, console }
    }

    /// Module-level startup line, emitted once before any run.
    pub fn init(&self) {
        self.console.emit("initializing module");
    }

    /// Run the sequence and return the final state.
    pub async fn run(&self, args: &[&str]) -> Result<State> {
        Ok(self.run_report(args).await?.state)
    }

    pub async fn run_report(&self, args: &[&str]) -> Result<RunReport> {
        let console = self.console.as_ref();
        let mut state = State::Init;
        tracing::info!(args = args.len(), %state, "run started");
        console.emit(&format!("args: {}", args.len()));

        let numbers = squares(self.settings.max_items);
        let doubled = double_evens(&numbers);
        for (index, value) in doubled.iter().enumerate() {
            console.emit(&format!("doubled[{index}] = {value}"));
        }

        let (first, rest) = split_head(&doubled);
        console.emit(&format!("first: {} rest: {}", render(&first)?, render(rest)?));
        let rest = rest.to_vec();

        let members = unique(&rest);
        let squared = squares_by_member(&members);
        tracing::debug!(members = members.len(), "built member map");

        let mut nodes = NodeList::new();
        nodes.append(Node::new(1, "alpha"));
        nodes.append(Node::from_fields(NodeFields {
            id: 2,
            name: "beta".to_string(),
        }));
        nodes.append(Node::new(3, "gamma"));

        for mut node in &mut nodes {
            node.set_value(Some(node.id() * 10));
            console.emit(&node.to_string());
        }

        let payload = json!({ "count": squared.len() });
        let response = fake_api_call(payload, self.settings.fetch_delay).await;
        console.emit(&format!(
            "api response: {}",
            render(&Response::data_or_empty(Some(&response)))?
        ));

        let parse_error = attempt_parse(console, MALFORMED_INPUT).err();

        state = State::Stopped;
        tracing::info!(%state, "run finished");

        Ok(RunReport {
            state,
            doubled,
            first,
            rest,
            members,
            squared,
            nodes,
            response,
            parse_error,
        })
    }

    /// Top-level invocation: run with `args` and report the outcome on the console.
    pub async fn invoke(&self, args: &[&str]) -> Result<State> {
        match self.run(args).await {
            Ok(state) => {
                self.console.emit(&format!("final state = {}", state.code()));
                Ok(state)
            }
            Err(err) => {
                tracing::error!("run failed: {err:#}");
                self.console.emit(&format!("unhandled error: {err:#}"));
                Err(err)
            }
        }
    }
}
