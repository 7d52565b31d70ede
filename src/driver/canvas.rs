//! Output surface for presented frames

use crate::visual::ArrayView;

/// Where the driver puts each visualized frame
pub trait Canvas {
    /// Forget everything shown for the previous run
    fn clear(&mut self);

    fn present(&mut self, view: ArrayView);
}

/// Keeps every view; handy for tests and for replaying a run
impl Canvas for Vec<ArrayView> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn present(&mut self, view: ArrayView) {
        self.push(view);
    }
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn present(&mut self, view: ArrayView) {
        (**self).present(view);
    }
}
