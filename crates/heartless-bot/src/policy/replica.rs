use super::{Policy, PolicyContext};
use crate::bot::{BotContext, DecisionError, PassPlanner, PlayBranch, PlayPlanner};
use heartless_core::codec::encode_cards;
use heartless_core::model::card::Card;
use tracing::{Level, event};

/// Rule-based policy matching the behaviour of the orchestrator's bundled
/// replica script.
#[derive(Debug, Default)]
pub struct ReplicaPolicy;

impl ReplicaPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl Policy for ReplicaPolicy {
    fn choose_pass(&mut self, ctx: &PolicyContext) -> Result<[Card; 3], DecisionError> {
        let selection = PassPlanner::choose(ctx.hand)?;
        log_pass_decision(ctx, &selection);
        Ok(selection)
    }

    fn choose_play(&mut self, ctx: &PolicyContext) -> Result<Card, DecisionError> {
        let bot_ctx = BotContext::new(ctx.seat, ctx.hand, ctx.round, ctx.seats);
        let (card, branch) = PlayPlanner::choose(&bot_ctx)?;
        log_play_decision(ctx, card, branch);
        Ok(card)
    }
}

fn log_pass_decision(ctx: &PolicyContext, selection: &[Card; 3]) {
    if !tracing::enabled!(Level::INFO) {
        return;
    }

    event!(
        target: "heartless_bot::pass",
        Level::INFO,
        seat = %ctx.seat,
        hand = %encode_cards(ctx.hand.cards()),
        cards = %encode_cards(selection),
    );
}

fn log_play_decision(ctx: &PolicyContext, chosen: Card, branch: PlayBranch) {
    if !tracing::enabled!(Level::INFO) {
        return;
    }

    let follow = ctx
        .round
        .suit_to_follow()
        .map(|suit| suit.name())
        .unwrap_or("-");

    event!(
        target: "heartless_bot::play",
        Level::INFO,
        seat = %ctx.seat,
        round = ctx.round.round(),
        under_the_gun = %ctx.round.under_the_gun(),
        round_winner = ?ctx.round.round_winner(),
        suit_to_follow = follow,
        high_card = ?ctx.round.high_card().map(|card| card.to_string()),
        hearts_broken = ctx.round.hearts_broken(),
        hand_size = ctx.hand.len(),
        branch = ?branch,
        chosen = %chosen,
    );
}
