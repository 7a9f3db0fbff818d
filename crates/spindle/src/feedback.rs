/// Fired once for every item boundary the wheel crosses under the user's hand.
pub trait SelectionFeedback {
    fn selection_changed(&self);
}

impl<F: Fn()> SelectionFeedback for F {
    fn selection_changed(&self) {
        self()
    }
}
