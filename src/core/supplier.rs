use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

/// A deferred value generator, pulled on demand.
///
/// The engine treats the produced values as opaque. Clones share the same
/// underlying closure, so a stochastic supplier keeps drawing from one stream.
#[derive(Clone)]
pub struct Supplier {
    source: Rc<dyn Fn() -> f64>,
}

impl Supplier {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> f64 + 'static,
    {
        Self {
            source: Rc::new(f),
        }
    }

    /// Supplier that always yields `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(move || value)
    }

    pub fn get(&self) -> f64 {
        (self.source)()
    }
}

impl fmt::Debug for Supplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Supplier(..)")
    }
}

/// One-shot view over a [`Supplier`].
///
/// The first call to [`Deferred::value`] draws from the supplier and the
/// result is kept; every later call (from any clone) returns the same value.
#[derive(Clone, Debug)]
pub struct Deferred {
    supplier: Supplier,
    value: Rc<OnceCell<f64>>,
}

impl Deferred {
    pub fn new(supplier: Supplier) -> Self {
        Self {
            supplier,
            value: Rc::new(OnceCell::new()),
        }
    }

    pub fn value(&self) -> f64 {
        *self.value.get_or_init(|| self.supplier.get())
    }

    /// True once the supplier has been drawn.
    pub fn is_drawn(&self) -> bool {
        self.value.get().is_some()
    }
}
