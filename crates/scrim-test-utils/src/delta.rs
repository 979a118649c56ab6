use scrim_core::{
    ActionKind, Actions, Bids, BodyType, Bytecodes, IndicatorDots, IndicatorLines,
    IndicatorStrings, Moves, ResourceDrops, SpawnedBodies, TeamResources, TurnDelta,
};

/// Builds a [`TurnDelta`] one event at a time. Groups stay `None` until
/// their first event.
#[derive(Clone, Debug)]
pub struct DeltaBuilder {
    delta: TurnDelta,
}

impl DeltaBuilder {
    pub fn new(round_id: i32) -> Self {
        Self {
            delta: TurnDelta::empty(round_id),
        }
    }

    pub fn resources(mut self, team: i32, lead: i32, gold: i32) -> Self {
        let g = self.delta.team_resources.get_or_insert_with(TeamResources::default);
        g.team_ids.push(team);
        g.lead_changes.push(lead);
        g.gold_changes.push(gold);
        self
    }

    pub fn moved(mut self, id: i32, x: i32, y: i32) -> Self {
        let g = self.delta.moved.get_or_insert_with(Moves::default);
        g.ids.push(id);
        g.xs.push(x);
        g.ys.push(y);
        self
    }

    pub fn spawn(self, id: i32, team: i32, body_type: BodyType, x: i32, y: i32) -> Self {
        self.spawn_raw(id, team, body_type as i32, x, y)
    }

    pub fn spawn_raw(mut self, id: i32, team: i32, raw_type: i32, x: i32, y: i32) -> Self {
        let g = self.delta.spawned.get_or_insert_with(SpawnedBodies::default);
        g.ids.push(id);
        g.teams.push(team);
        g.types.push(raw_type);
        g.xs.push(x);
        g.ys.push(y);
        self
    }

    pub fn die(mut self, id: i32) -> Self {
        self.delta.died_ids.push(id);
        self
    }

    pub fn action(self, id: i32, kind: ActionKind, target: i32) -> Self {
        self.action_raw(id, kind.raw(), target)
    }

    pub fn action_raw(mut self, id: i32, raw_kind: i32, target: i32) -> Self {
        let g = self.delta.actions.get_or_insert_with(Actions::default);
        g.ids.push(id);
        g.kinds.push(raw_kind);
        g.targets.push(target);
        self
    }

    pub fn lead_drop(mut self, x: i32, y: i32, value: i32) -> Self {
        push_drop(self.delta.lead_drops.get_or_insert_with(ResourceDrops::default), x, y, value);
        self
    }

    pub fn gold_drop(mut self, x: i32, y: i32, value: i32) -> Self {
        push_drop(self.delta.gold_drops.get_or_insert_with(ResourceDrops::default), x, y, value);
        self
    }

    pub fn dot(mut self, id: i32, x: i32, y: i32, rgb: [i32; 3]) -> Self {
        let g = self.delta.indicator_dots.get_or_insert_with(IndicatorDots::default);
        g.ids.push(id);
        g.xs.push(x);
        g.ys.push(y);
        g.red.push(rgb[0]);
        g.green.push(rgb[1]);
        g.blue.push(rgb[2]);
        self
    }

    pub fn line(mut self, id: i32, start: (i32, i32), end: (i32, i32), rgb: [i32; 3]) -> Self {
        let g = self.delta.indicator_lines.get_or_insert_with(IndicatorLines::default);
        g.ids.push(id);
        g.start_xs.push(start.0);
        g.start_ys.push(start.1);
        g.end_xs.push(end.0);
        g.end_ys.push(end.1);
        g.red.push(rgb[0]);
        g.green.push(rgb[1]);
        g.blue.push(rgb[2]);
        self
    }

    pub fn indicator_string(mut self, id: i32, text: &str) -> Self {
        let g = self.delta.indicator_strings.get_or_insert_with(IndicatorStrings::default);
        g.ids.push(id);
        g.texts.push(text.to_owned());
        self
    }

    pub fn bytecodes(mut self, id: i32, used: i32) -> Self {
        let g = self.delta.bytecodes.get_or_insert_with(Bytecodes::default);
        g.ids.push(id);
        g.used.push(used);
        self
    }

    pub fn bid(mut self, id: i32, amount: i32) -> Self {
        let g = self.delta.bids.get_or_insert_with(Bids::default);
        g.ids.push(id);
        g.amounts.push(amount);
        self
    }

    pub fn logs(mut self, text: &str) -> Self {
        self.delta.logs = Some(text.to_owned());
        self
    }

    pub fn build(self) -> TurnDelta {
        self.delta
    }
}

fn push_drop(g: &mut ResourceDrops, x: i32, y: i32, value: i32) {
    g.xs.push(x);
    g.ys.push(y);
    g.values.push(value);
}
