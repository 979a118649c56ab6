//! Column layouts of the snapshot's entity stores.

use scrim_store::{ColumnKey, ColumnKind, ColumnSpec, EntityStore, Schema};

/// Declares a column enum and a [`Schema`] for it.
macro_rules! schema {
    (
        $(#[$meta:meta])*
        $schema:ident, $column:ident, $name:literal {
            $($(#[$cmeta:meta])* $variant:ident => $cname:literal : $kind:ident),+ $(,)?
        }
    ) => {
        #[doc = concat!("Columns of the `", $name, "` store.")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $column {
            $($(#[$cmeta])* $variant),+
        }

        impl ColumnKey for $column {
            fn position(self) -> usize {
                self as usize
            }
        }

        $(#[$meta])*
        #[derive(Clone, Copy, Debug)]
        pub struct $schema;

        impl Schema for $schema {
            type Column = $column;
            const NAME: &'static str = $name;
            const COLUMNS: &'static [ColumnSpec<$column>] = &[
                $(ColumnSpec {
                    column: $column::$variant,
                    name: $cname,
                    kind: ColumnKind::$kind,
                }),+
            ];
        }
    };
}

schema! {
    /// Live bodies.
    BodySchema, BodyColumn, "bodies" {
        /// Owning team (0 = neutral).
        Team => "team": I8,
        /// Raw body type.
        Type => "type": I8,
        /// Map-relative x.
        X => "x": I32,
        /// Map-relative y.
        Y => "y": I32,
        /// Bytecodes used in the most recent report.
        BytecodesUsed => "bytecodes_used": I32,
        /// Raw action performed this turn, -1 for none.
        Action => "action": I8,
        /// Action target.
        Target => "target": I32,
        /// Target x at the time of the action.
        TargetX => "target_x": I32,
        /// Target y at the time of the action.
        TargetY => "target_y": I32,
        /// Id of the body that spawned this one, 0 for none.
        Parent => "parent": I32,
        /// Hit points.
        Hp => "hp": I32,
        /// Upgrade level, 1..=3.
        Level => "level": I8,
        /// Building is packed for transport.
        Portable => "portable": I8,
        /// Building is under construction.
        Prototype => "prototype": I8,
        /// Pending bid (legacy).
        Bid => "bid": I32,
    }
}

schema! {
    /// Bodies that died during the most recent turn, at their last position.
    DiedSchema, DiedColumn, "died_bodies" {
        /// Last x.
        X => "x": I32,
        /// Last y.
        Y => "y": I32,
    }
}

schema! {
    /// Indicator dots of the most recent turn, keyed by batch position.
    DotSchema, DotColumn, "indicator_dots" {
        /// Emitting body.
        Body => "body": I32,
        /// Dot x.
        X => "x": I32,
        /// Dot y.
        Y => "y": I32,
        /// Red channel.
        Red => "red": I32,
        /// Green channel.
        Green => "green": I32,
        /// Blue channel.
        Blue => "blue": I32,
    }
}

schema! {
    /// Indicator lines of the most recent turn, keyed by batch position.
    LineSchema, LineColumn, "indicator_lines" {
        /// Emitting body.
        Body => "body": I32,
        /// Start x.
        StartX => "start_x": I32,
        /// Start y.
        StartY => "start_y": I32,
        /// End x.
        EndX => "end_x": I32,
        /// End y.
        EndY => "end_y": I32,
        /// Red channel.
        Red => "red": I32,
        /// Green channel.
        Green => "green": I32,
        /// Blue channel.
        Blue => "blue": I32,
    }
}

/// Store of live bodies.
pub type BodyStore = EntityStore<BodySchema>;
/// Store of bodies that died this turn.
pub type DiedStore = EntityStore<DiedSchema>;
/// Store of this turn's indicator dots.
pub type DotStore = EntityStore<DotSchema>;
/// Store of this turn's indicator lines.
pub type LineStore = EntityStore<LineSchema>;

#[cfg(test)]
mod tests {
    use super::*;

    fn positions_match<S: Schema>() -> bool {
        S::COLUMNS
            .iter()
            .enumerate()
            .all(|(i, spec)| spec.column.position() == i)
    }

    #[test]
    fn column_tables_are_in_position_order() {
        assert!(positions_match::<BodySchema>());
        assert!(positions_match::<DiedSchema>());
        assert!(positions_match::<DotSchema>());
        assert!(positions_match::<LineSchema>());
    }

    #[test]
    fn body_flags_are_narrow() {
        let store = BodyStore::new();
        assert_eq!(store.column_kind(BodyColumn::Action), ColumnKind::I8);
        assert_eq!(store.column_kind(BodyColumn::Hp), ColumnKind::I32);
        assert_eq!(BodySchema::column_name(BodyColumn::TargetX), "target_x");
    }
}
