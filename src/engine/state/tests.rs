use super::*;
use crate::types::SlotContent;

fn catalogue() -> Vec<Item> {
	vec![
		Item::new("voice", "Voice Assistant", "Speech interface for support"),
		Item::new("ocr", "Invoice Reader", "Finance OCR").with_category("Finance"),
		Item::new("widget", "Support Chat Widget", "Embeddable chatbot"),
		Item::new("forecast", "Demand Forecast", "Retail planning"),
		Item::new("chatbot", "Chatbot", "Conversational agent"),
		Item::new("vision", "Shelf Vision", "Retail shelf analytics"),
		Item::new("translate", "Live Translate", "Speech translation"),
		Item::new("fraud", "Fraud Radar", "Finance anomaly detection"),
		Item::new("summarize", "Meeting Summaries", "Notes from calls"),
		Item::new("studio", "Chatbot Studio", "Build bots"),
	]
}

fn loaded_state() -> HubState {
	let mut state = HubState::default().with_session_id("session-1");
	let effects = state.handle(HubEvent::CatalogueLoaded(catalogue()));
	assert!(effects.is_empty());
	state
}

fn submit(state: &mut HubState) -> RequestToken {
	match state.handle(HubEvent::QuerySubmitted).as_slice() {
		[HubEffect::IssueAiSearch { token, .. }] => *token,
		other => panic!("expected a single AI search effect, got {other:?}"),
	}
}

fn cards(ids: &[&str]) -> Vec<Item> {
	ids.iter()
		.map(|id| Item::new(*id, format!("AI {id}"), "from the agent"))
		.collect()
}

#[test]
fn starts_idle_with_catalogue_in_order() {
	let state = loaded_state();
	assert_eq!(state.mode(), SearchMode::Idle);
	assert_eq!(state.hint(), None);

	let assignment = state.assignment();
	assert_eq!(assignment.total_slots(), 60);
	assert_eq!(assignment.get(RESERVED_INDEX), Some(&SlotContent::Search));
	assert_eq!(assignment.position_of("voice"), Some(2));
	assert_eq!(assignment.position_of("ocr"), Some(0));
	assert_eq!(assignment.position_of("widget"), Some(3));
	assert_eq!(assignment.items().count(), 10);
	assert_eq!(assignment.filler_count(), 49);
}

#[test]
fn exact_title_match_is_placed_after_the_search_slot() {
	let mut state = loaded_state();
	let effects = state.handle(HubEvent::QueryChanged("chatbot".into()));

	assert_eq!(effects, vec![HubEffect::ScrollToReservedSlot]);
	assert_eq!(state.mode(), SearchMode::LocalMatch);
	assert_eq!(state.matches()[0].item.id, "chatbot");
	assert_eq!(state.matches()[0].score, 1000);

	let assignment = state.assignment();
	assert_eq!(assignment.position_of("chatbot"), Some(RESERVED_INDEX + 1));
	assert_eq!(assignment.position_of("studio"), Some(RESERVED_INDEX - 1));
	// Non-matching catalogue items follow the matches in catalogue order.
	assert_eq!(assignment.position_of("voice"), Some(3));
	assert_eq!(assignment.items().count(), 10);
}

#[test]
fn scroll_is_requested_only_for_a_new_best_match() {
	let mut state = loaded_state();
	assert_eq!(
		state.handle(HubEvent::QueryChanged("chat".into())),
		vec![HubEffect::ScrollToReservedSlot]
	);
	let best = state.matches()[0].item.id.clone();

	let effects = state.handle(HubEvent::QueryChanged("chat ".into()));
	assert!(effects.is_empty());
	assert_eq!(state.matches()[0].item.id, best);

	let effects = state.handle(HubEvent::QueryChanged("chatbot".into()));
	assert_eq!(effects, vec![HubEffect::ScrollToReservedSlot]);
}

#[test]
fn unmatched_query_keeps_the_idle_grid_with_a_hint() {
	let mut state = loaded_state();
	let idle_grid = state.assignment();

	let effects = state.handle(HubEvent::QueryChanged("zzz-no-match".into()));
	assert!(effects.is_empty());
	assert_eq!(state.mode(), SearchMode::NoLocalMatch);
	assert!(state.matches().is_empty());
	assert_eq!(state.hint(), Some(NO_LOCAL_MATCH_HINT));
	assert_eq!(state.assignment(), idle_grid);
}

#[test]
fn clearing_the_query_returns_to_idle() {
	let mut state = loaded_state();
	let idle_grid = state.assignment();
	state.handle(HubEvent::QueryChanged("finance".into()));
	assert_ne!(state.mode(), SearchMode::Idle);

	state.handle(HubEvent::QueryChanged("   ".into()));
	assert_eq!(state.mode(), SearchMode::Idle);
	assert_eq!(state.assignment(), idle_grid);
}

#[test]
fn submitting_an_empty_query_does_nothing() {
	let mut state = loaded_state();
	assert!(state.handle(HubEvent::QuerySubmitted).is_empty());
	assert_eq!(state.mode(), SearchMode::Idle);
}

#[test]
fn submitting_keeps_the_previous_grid_while_loading() {
	let mut state = loaded_state();
	state.handle(HubEvent::QueryChanged("chatbot".into()));
	let local_grid = state.assignment();

	let effects = state.handle(HubEvent::QuerySubmitted);
	let [HubEffect::IssueAiSearch { token, request }] = effects.as_slice() else {
		panic!("expected an AI search effect, got {effects:?}");
	};
	assert_eq!(request.query, "chatbot");
	assert_eq!(request.session_id, "session-1");
	assert_eq!(state.current_token(), Some(*token));
	assert_eq!(state.mode(), SearchMode::AiLoading);
	assert_eq!(state.hint(), Some(AI_LOADING_HINT));
	assert_eq!(state.assignment(), local_grid);
}

#[test]
fn ai_results_replace_the_catalogue() {
	let mut state = loaded_state();
	state.handle(HubEvent::QueryChanged("help my support team".into()));
	let token = submit(&mut state);

	let effects = state.handle(HubEvent::AiResponded {
		token,
		outcome: Ok(AiSearchResponse::with_cards(cards(&["a", "b", "c"]))),
	});
	assert_eq!(effects, vec![HubEffect::ScrollToReservedSlot]);
	assert_eq!(state.mode(), SearchMode::AiResult);

	let assignment = state.assignment();
	assert_eq!(assignment.position_of("a"), Some(2));
	assert_eq!(assignment.position_of("b"), Some(0));
	assert_eq!(assignment.position_of("c"), Some(3));
	assert_eq!(assignment.items().count(), 3);
	for item in catalogue() {
		assert_eq!(assignment.position_of(&item.id), None);
	}
	assert_eq!(state.catalogue(), catalogue().as_slice());
}

#[test]
fn clearing_after_ai_results_restores_the_catalogue() {
	let mut state = loaded_state();
	let idle_grid = state.assignment();
	state.handle(HubEvent::QueryChanged("support".into()));
	let token = submit(&mut state);
	state.handle(HubEvent::AiResponded {
		token,
		outcome: Ok(AiSearchResponse::with_cards(cards(&["a"]))),
	});

	state.handle(HubEvent::QueryChanged(String::new()));
	assert_eq!(state.mode(), SearchMode::Idle);
	assert_eq!(state.assignment(), idle_grid);
}

#[test]
fn late_response_after_clearing_is_discarded() {
	let mut state = loaded_state();
	let idle_grid = state.assignment();
	state.handle(HubEvent::QueryChanged("support".into()));
	let token = submit(&mut state);

	state.handle(HubEvent::QueryChanged(String::new()));
	let effects = state.handle(HubEvent::AiResponded {
		token,
		outcome: Ok(AiSearchResponse::with_cards(cards(&["late"]))),
	});

	assert!(effects.is_empty());
	assert_eq!(state.mode(), SearchMode::Idle);
	assert_eq!(state.assignment(), idle_grid);
	assert_eq!(state.catalogue().len(), 10);
}

#[test]
fn only_the_latest_submission_is_current() {
	let mut state = loaded_state();
	state.handle(HubEvent::QueryChanged("support".into()));
	let first = submit(&mut state);
	let second = submit(&mut state);
	assert!(second > first);

	let stale = state.handle(HubEvent::AiResponded {
		token: first,
		outcome: Ok(AiSearchResponse::with_cards(cards(&["old"]))),
	});
	assert!(stale.is_empty());
	assert_eq!(state.mode(), SearchMode::AiLoading);

	state.handle(HubEvent::AiResponded {
		token: second,
		outcome: Ok(AiSearchResponse::with_cards(cards(&["new"]))),
	});
	assert_eq!(state.mode(), SearchMode::AiResult);
	assert_eq!(state.assignment().position_of("new"), Some(2));
	assert_eq!(state.assignment().position_of("old"), None);
}

#[test]
fn resubmitting_keeps_the_original_grid_visible() {
	let mut state = loaded_state();
	state.handle(HubEvent::QueryChanged("chatbot".into()));
	let local_grid = state.assignment();
	submit(&mut state);
	submit(&mut state);
	assert_eq!(state.assignment(), local_grid);
}

#[test]
fn editing_the_query_abandons_the_ai_search() {
	let mut state = loaded_state();
	state.handle(HubEvent::QueryChanged("support".into()));
	let token = submit(&mut state);

	state.handle(HubEvent::QueryChanged("support chat".into()));
	assert_eq!(state.mode(), SearchMode::LocalMatch);
	assert_eq!(state.current_token(), None);

	let effects = state.handle(HubEvent::AiResponded {
		token,
		outcome: Ok(AiSearchResponse::with_cards(cards(&["a"]))),
	});
	assert!(effects.is_empty());
	assert_eq!(state.mode(), SearchMode::LocalMatch);
}

#[test]
fn empty_ai_results_show_a_filler_grid() {
	let mut state = loaded_state();
	state.handle(HubEvent::QueryChanged("support".into()));
	let token = submit(&mut state);

	let effects = state.handle(HubEvent::AiResponded {
		token,
		outcome: Ok(AiSearchResponse::with_cards(Vec::new())),
	});
	assert_eq!(effects, vec![HubEffect::Notify(Notice::NoAiResults)]);
	assert_eq!(state.mode(), SearchMode::AiEmpty);
	assert_eq!(state.hint(), Some(AI_EMPTY_HINT));

	let assignment = state.assignment();
	assert_eq!(assignment.items().count(), 0);
	assert_eq!(assignment.filler_count(), assignment.total_slots() - 1);
}

#[test]
fn malformed_success_counts_as_no_results() {
	let mut state = loaded_state();
	state.handle(HubEvent::QueryChanged("support".into()));
	let token = submit(&mut state);

	let response: AiSearchResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
	state.handle(HubEvent::AiResponded {
		token,
		outcome: Ok(response),
	});
	assert_eq!(state.mode(), SearchMode::AiEmpty);
}

#[test]
fn failed_request_restores_the_catalogue() {
	let mut state = loaded_state();
	let idle_grid = state.assignment();
	state.handle(HubEvent::QueryChanged("support".into()));
	let token = submit(&mut state);

	let effects = state.handle(HubEvent::AiResponded {
		token,
		outcome: Err(AiError::Transport("connection reset".into())),
	});
	assert_eq!(
		effects,
		vec![HubEffect::Notify(Notice::AiFailed {
			message: "AI search request failed: connection reset".into()
		})]
	);
	assert_eq!(state.mode(), SearchMode::Idle);
	assert_eq!(state.assignment(), idle_grid);
	assert_eq!(state.query().raw(), "support");
}

#[test]
fn unsuccessful_response_uses_the_backend_message() {
	let mut state = loaded_state();
	state.handle(HubEvent::QueryChanged("support".into()));
	let token = submit(&mut state);

	let effects = state.handle(HubEvent::AiResponded {
		token,
		outcome: Ok(AiSearchResponse::failure("agent offline")),
	});
	assert_eq!(
		effects,
		vec![HubEffect::Notify(Notice::AiFailed {
			message: "agent offline".into()
		})]
	);
	assert_eq!(state.mode(), SearchMode::Idle);
}

#[test]
fn catalogue_reload_reranks_local_matches() {
	let mut state = HubState::default();
	state.handle(HubEvent::QueryChanged("chatbot".into()));
	assert_eq!(state.mode(), SearchMode::NoLocalMatch);

	let effects = state.handle(HubEvent::CatalogueLoaded(catalogue()));
	assert_eq!(effects, vec![HubEffect::ScrollToReservedSlot]);
	assert_eq!(state.mode(), SearchMode::LocalMatch);
	assert_eq!(state.matches()[0].item.id, "chatbot");
}

#[test]
fn resize_recomputes_the_slot_count() {
	let mut state = HubState::new(GridConfig {
		min_slots: 8,
		extra_rows: 3,
	});
	assert_eq!(state.total_slots(), 8);

	state.handle(HubEvent::Resized(Viewport::new(1200.0, 600.0)));
	assert_eq!(state.total_slots(), 36);
	assert_eq!(state.assignment().total_slots(), 36);
	assert_eq!(state.viewport(), Viewport::new(1200.0, 600.0));
}

#[test]
fn reduce_matches_handle() {
	let (state, effects) = reduce(loaded_state(), HubEvent::QueryChanged("chatbot".into()));
	assert_eq!(state.mode(), SearchMode::LocalMatch);
	assert_eq!(effects, vec![HubEffect::ScrollToReservedSlot]);
}
