/// How a tuning epoch walks the coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Sweep every unsettled coordinate repeatedly until all are settled.
    ///
    /// A coordinate that fails both probes halves its step and waits for the
    /// next sweep, so later coordinates get a chance to move first.
    #[default]
    Simultaneous,

    /// Finish each coordinate before moving to the next one.
    ///
    /// A coordinate keeps halving its step and probing until it accepts a
    /// move or its step reaches the fixed point, in a single pass over the
    /// vector.
    Sequential,
}
