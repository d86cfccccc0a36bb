//! The composition protocol shared by primitives and combinators.
//!
//! Every parser takes the session and a caller-defined context by exclusive
//! borrow, reads the cursor, writes exactly one [`ParseResult`] into
//! `pd.result`, and may then run a semantic hook. Plain closures of that shape
//! are parsers too.
//!
//! [`ParseResult`]: crate::ParseResult

use std::rc::{Rc, Weak};

use once_cell::unsync::OnceCell;

use crate::errors::ConfigError;
use crate::session::ParseData;

/// A parser over values of type `T` with a context of type `C`.
pub trait Parser<T = (), C = ()> {
    fn parse(&self, pd: &mut ParseData<T>, ctx: &mut C);
}

impl<T, C, F> Parser<T, C> for F
where
    F: Fn(&mut ParseData<T>, &mut C),
{
    fn parse(&self, pd: &mut ParseData<T>, ctx: &mut C) {
        self(pd, ctx)
    }
}

/// Shared handle to any parser; what combinators hold as children.
pub type SubParser<T = (), C = ()> = Rc<dyn Parser<T, C>>;

/// Caller-supplied function run after a successful syntactic match.
///
/// A hook may set `pd.result.value`, add feedback, or turn the success into
/// a failure with [`ParseData::reject`].
pub type SemanticHook<T = (), C = ()> = Rc<dyn Fn(&mut ParseData<T>, &mut C)>;

/// Conversion of concrete parsers into [`SubParser`] handles.
pub trait ParserExt<T, C>: Parser<T, C> + Sized + 'static {
    fn boxed(self) -> SubParser<T, C> {
        Rc::new(self)
    }
}

impl<T, C, P: Parser<T, C> + 'static> ParserExt<T, C> for P {}

/// Runs the hook if the current result is a success, then drops the child
/// results so they cannot leak into the next invocation.
pub(crate) fn handle_semantics<T, C>(
    semantics: Option<&SemanticHook<T, C>>,
    pd: &mut ParseData<T>,
    ctx: &mut C,
) {
    if let Some(hook) = semantics {
        if !pd.result.has_error() {
            hook(pd, ctx);
        }
    }
    pd.sub_results.clear();
}

/// Adds the `with_semantics` builder to a parser struct with a
/// `semantics: Option<SemanticHook<T, C>>` field.
macro_rules! impl_with_semantics {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<T: 'static, C: 'static> $ty<T, C> {
                /// Attaches a semantic hook, replacing any earlier one.
                pub fn with_semantics(
                    mut self,
                    hook: impl Fn(&mut $crate::ParseData<T>, &mut C) + 'static,
                ) -> Self {
                    self.semantics = Some(std::rc::Rc::new(hook));
                    self
                }
            }
        )*
    };
}

pub(crate) use impl_with_semantics;

// ============================================================================
// FORWARD DECLARATION
// ============================================================================

/// A placeholder bound to its real parser after construction, for grammars
/// that refer to themselves. Clones share the same binding and keep it alive.
///
/// Inside the grammar, refer to the placeholder through [`Forward::weak`]:
/// a bound parser holding a strong clone of its own `Forward` would form a
/// reference cycle and never be freed.
pub struct Forward<T, C> {
    target: Rc<OnceCell<SubParser<T, C>>>,
}

impl<T, C> Clone for Forward<T, C> {
    fn clone(&self) -> Self {
        Self {
            target: Rc::clone(&self.target),
        }
    }
}

impl<T, C> Default for Forward<T, C> {
    fn default() -> Self {
        Self {
            target: Rc::new(OnceCell::new()),
        }
    }
}

impl<T, C> Forward<T, C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&self, parser: SubParser<T, C>) -> Result<(), ConfigError> {
        self.target
            .set(parser)
            .map_err(|_| ConfigError::ForwardAlreadyBound)
    }

    pub fn is_bound(&self) -> bool {
        self.target.get().is_some()
    }

    /// A non-owning handle for use inside the grammar this forward is bound to.
    pub fn weak(&self) -> WeakForward<T, C> {
        WeakForward {
            target: Rc::downgrade(&self.target),
        }
    }
}

impl<T, C> Parser<T, C> for Forward<T, C> {
    fn parse(&self, pd: &mut ParseData<T>, ctx: &mut C) {
        parse_target(self.target.get(), pd, ctx);
    }
}

/// Non-owning handle to a [`Forward`]. It fails to parse once every owning
/// `Forward` is gone.
pub struct WeakForward<T, C> {
    target: Weak<OnceCell<SubParser<T, C>>>,
}

impl<T, C> Clone for WeakForward<T, C> {
    fn clone(&self) -> Self {
        Self {
            target: Weak::clone(&self.target),
        }
    }
}

impl<T, C> Parser<T, C> for WeakForward<T, C> {
    fn parse(&self, pd: &mut ParseData<T>, ctx: &mut C) {
        match self.target.upgrade() {
            Some(target) => parse_target(target.get(), pd, ctx),
            None => pd.create_unmatched_result(0, "forward parser was dropped", None),
        }
    }
}

fn parse_target<T, C>(target: Option<&SubParser<T, C>>, pd: &mut ParseData<T>, ctx: &mut C) {
    match target {
        Some(parser) => parser.parse(pd, ctx),
        None => pd.create_unmatched_result(0, "forward parser used before being bound", None),
    }
}
