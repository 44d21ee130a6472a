use std::collections::HashMap;

use stride_core::{
    DtSlot, SolutionState, Stepper,
    steppers::{
        ConstDt, Dt2, EveryN, FixedPoint, FromSlot, GrowShrink, IfConverged, Instrumented,
        MaxRatio, MinOf, Startup,
    },
};
use uom::si::{f64::Time, time::second};

use crate::{BuildError, Error, Node, parse};

/// A registry entry: builds one stepper type from its argument nodes.
///
/// Receives the builder (for recursive child builds and slot lookup), the
/// stepper-type name and its source index (for error reporting), and the
/// arguments following the name.
pub type BuildFn<S> =
    fn(&StepperBuilder<S>, &str, usize, &[Node]) -> Result<Box<dyn Stepper<S>>, BuildError>;

/// Instantiates stepper trees from parsed configuration expressions.
///
/// The builder starts with every built-in stepper type registered and is open
/// to extension: [`register`](Self::register) adds or replaces entries.
/// Slot-backed steppers (`ReturnPtrStepper`, `InstrumentedStepper`) refer to
/// caller-owned [`DtSlot`]s by name; supply them with
/// [`with_slot`](Self::with_slot) before building.
///
/// Any failure is fatal to that build; no partial tree is produced.
pub struct StepperBuilder<S: SolutionState> {
    registry: HashMap<String, BuildFn<S>>,
    slots: HashMap<String, DtSlot>,
}

impl<S: SolutionState + 'static> Default for StepperBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SolutionState + 'static> StepperBuilder<S> {
    /// Creates a builder with the built-in stepper types registered.
    #[must_use]
    pub fn new() -> Self {
        let mut builder = Self {
            registry: HashMap::new(),
            slots: HashMap::new(),
        };
        builder.register("ConstStepper", build_const::<S>);
        builder.register("FixedPointStepper", build_fixed_point::<S>);
        builder.register("MinOfStepper", build_min_of::<S>);
        builder.register("MaxRatioStepper", build_max_ratio::<S>);
        builder.register("GrowShrinkStepper", build_grow_shrink::<S>);
        builder.register("StartupStepper", build_startup::<S>);
        builder.register("IfConvergedStepper", build_if_converged::<S>);
        builder.register("EveryNStepper", build_every_n::<S>);
        builder.register("DT2Stepper", build_dt2::<S>);
        builder.register("ReturnPtrStepper", build_return_ptr::<S>);
        builder.register("InstrumentedStepper", build_instrumented::<S>);
        builder
    }

    /// Registers `build` under `name`, replacing any existing entry.
    pub fn register(&mut self, name: impl Into<String>, build: BuildFn<S>) {
        self.registry.insert(name.into(), build);
    }

    /// Makes a caller-owned slot addressable as `name` in expressions.
    #[must_use]
    pub fn with_slot(mut self, name: impl Into<String>, slot: DtSlot) -> Self {
        self.slots.insert(name.into(), slot);
        self
    }

    /// Lexes, parses, and builds `source` in one call.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`](crate::ParseError) or [`BuildError`]
    /// encountered.
    pub fn build_str(&self, source: &str) -> Result<Box<dyn Stepper<S>>, Error> {
        let node = parse(source)?;
        Ok(self.build(&node)?)
    }

    /// Builds a stepper tree from a parsed expression.
    ///
    /// The node must be a list whose first item names a registered stepper
    /// type; the remaining items are that type's arguments, built
    /// recursively where they are themselves stepper expressions.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] for a non-list node, an unrecognized type
    /// name, an unknown slot name, or a malformed argument list.
    pub fn build(&self, node: &Node) -> Result<Box<dyn Stepper<S>>, BuildError> {
        let Node::List { items, index } = node else {
            return Err(BuildError::ExpectedList { index: node.index() });
        };
        let Some((head, args)) = items.split_first() else {
            return Err(BuildError::ExpectedList { index: *index });
        };
        let Some(name) = head.as_text() else {
            return Err(BuildError::ExpectedList { index: head.index() });
        };

        match self.registry.get(name) {
            Some(build) => build(self, name, head.index(), args),
            None => Err(BuildError::UnknownStepper {
                name: name.to_string(),
                index: head.index(),
            }),
        }
    }

    /// Looks up a named slot for the builder function of a slot-backed
    /// stepper.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnknownSlot`] if no slot was registered under
    /// `name`.
    pub fn slot(&self, name: &str, index: usize) -> Result<DtSlot, BuildError> {
        self.slots
            .get(name)
            .cloned()
            .ok_or_else(|| BuildError::UnknownSlot {
                name: name.to_string(),
                index,
            })
    }
}

fn seconds(node: &Node) -> Time {
    Time::new::<second>(node.as_f64())
}

fn check_arity(
    name: &str,
    index: usize,
    args: &[Node],
    expected: &'static str,
    ok: bool,
) -> Result<(), BuildError> {
    if ok {
        Ok(())
    } else {
        Err(BuildError::WrongArity {
            stepper: name.to_string(),
            expected,
            found: args.len(),
            index,
        })
    }
}

fn slot_name<'a>(name: &str, args: &'a [Node], position: usize) -> Result<&'a str, BuildError> {
    args[position].as_text().ok_or_else(|| BuildError::BadArgument {
        stepper: name.to_string(),
        expected: "a slot name",
        position,
        index: args[position].index(),
    })
}

fn build_const<S: SolutionState + 'static>(
    _builder: &StepperBuilder<S>,
    name: &str,
    index: usize,
    args: &[Node],
) -> Result<Box<dyn Stepper<S>>, BuildError> {
    check_arity(name, index, args, "1 (dt)", args.len() == 1)?;
    Ok(Box::new(ConstDt::new(seconds(&args[0]))))
}

fn build_fixed_point<S: SolutionState + 'static>(
    _builder: &StepperBuilder<S>,
    name: &str,
    index: usize,
    args: &[Node],
) -> Result<Box<dyn Stepper<S>>, BuildError> {
    check_arity(name, index, args, "2 (times, tol)", args.len() == 2)?;
    let times: Vec<Time> = args[0]
        .as_f64_list()
        .into_iter()
        .map(Time::new::<second>)
        .collect();
    Ok(Box::new(FixedPoint::new(times, seconds(&args[1]))))
}

fn build_min_of<S: SolutionState + 'static>(
    builder: &StepperBuilder<S>,
    name: &str,
    index: usize,
    args: &[Node],
) -> Result<Box<dyn Stepper<S>>, BuildError> {
    check_arity(name, index, args, "3 (stepper, stepper, tol)", args.len() == 3)?;
    let a = builder.build(&args[0])?;
    let b = builder.build(&args[1])?;
    Ok(Box::new(MinOf::new(a, b, seconds(&args[2]))))
}

fn build_max_ratio<S: SolutionState + 'static>(
    builder: &StepperBuilder<S>,
    name: &str,
    index: usize,
    args: &[Node],
) -> Result<Box<dyn Stepper<S>>, BuildError> {
    check_arity(name, index, args, "2 (stepper, max-ratio)", args.len() == 2)?;
    let inner = builder.build(&args[0])?;
    Ok(Box::new(MaxRatio::new(inner, args[1].as_f64())))
}

fn build_grow_shrink<S: SolutionState + 'static>(
    builder: &StepperBuilder<S>,
    name: &str,
    index: usize,
    args: &[Node],
) -> Result<Box<dyn Stepper<S>>, BuildError> {
    check_arity(
        name,
        index,
        args,
        "2 or 3 (shrink, grow[, source])",
        args.len() == 2 || args.len() == 3,
    )?;
    let shrink = args[0].as_f64();
    let grow = args[1].as_f64();
    match args.get(2) {
        Some(source) => {
            let source = builder.build(source)?;
            Ok(Box::new(GrowShrink::with_source(shrink, grow, source)))
        }
        None => Ok(Box::new(GrowShrink::new(shrink, grow))),
    }
}

fn build_startup<S: SolutionState + 'static>(
    builder: &StepperBuilder<S>,
    name: &str,
    index: usize,
    args: &[Node],
) -> Result<Box<dyn Stepper<S>>, BuildError> {
    check_arity(
        name,
        index,
        args,
        "3 (stepper, startup-dt, n-startup-steps)",
        args.len() == 3,
    )?;
    let inner = builder.build(&args[0])?;
    Ok(Box::new(Startup::new(
        inner,
        seconds(&args[1]),
        args[2].as_usize(),
    )))
}

fn build_if_converged<S: SolutionState + 'static>(
    builder: &StepperBuilder<S>,
    name: &str,
    index: usize,
    args: &[Node],
) -> Result<Box<dyn Stepper<S>>, BuildError> {
    check_arity(
        name,
        index,
        args,
        "2 (on-converged, on-failed)",
        args.len() == 2,
    )?;
    let on_converged = builder.build(&args[0])?;
    let on_failed = builder.build(&args[1])?;
    Ok(Box::new(IfConverged::new(on_converged, on_failed)))
}

fn build_every_n<S: SolutionState + 'static>(
    builder: &StepperBuilder<S>,
    name: &str,
    index: usize,
    args: &[Node],
) -> Result<Box<dyn Stepper<S>>, BuildError> {
    check_arity(name, index, args, "2 (stepper, n)", args.len() == 2)?;
    let inner = builder.build(&args[0])?;
    Ok(Box::new(EveryN::new(inner, args[1].as_usize())))
}

fn build_dt2<S: SolutionState + 'static>(
    _builder: &StepperBuilder<S>,
    name: &str,
    index: usize,
    args: &[Node],
) -> Result<Box<dyn Stepper<S>>, BuildError> {
    check_arity(
        name,
        index,
        args,
        "3 (time-tol, error-tol, error-max)",
        args.len() == 3,
    )?;
    Ok(Box::new(Dt2::new(
        seconds(&args[0]),
        args[1].as_f64(),
        args[2].as_f64(),
    )))
}

fn build_return_ptr<S: SolutionState + 'static>(
    builder: &StepperBuilder<S>,
    name: &str,
    index: usize,
    args: &[Node],
) -> Result<Box<dyn Stepper<S>>, BuildError> {
    check_arity(name, index, args, "1 (slot-name)", args.len() == 1)?;
    let slot = builder.slot(slot_name(name, args, 0)?, args[0].index())?;
    Ok(Box::new(FromSlot::new(slot)))
}

fn build_instrumented<S: SolutionState + 'static>(
    builder: &StepperBuilder<S>,
    name: &str,
    index: usize,
    args: &[Node],
) -> Result<Box<dyn Stepper<S>>, BuildError> {
    check_arity(name, index, args, "2 (slot-name, stepper)", args.len() == 2)?;
    let slot = builder.slot(slot_name(name, args, 0)?, args[0].index())?;
    let inner = builder.build(&args[1])?;
    Ok(Box::new(Instrumented::new(inner, slot)))
}
