//! Centralized limits for the resolution chains.
//!
//! Both resolvers follow references through a symbol index owned by the host.
//! The index may contain cycles (`A::X = B::Y; B::Y = A::X`, a class that
//! extends itself) or be rebuilt between two lookups, so every chain is
//! bounded by one of the limits below. Hitting a limit is an abstain, never
//! an error.

/// Maximum nesting of type-signature decoding.
///
/// A method's return type may itself be an encoded member signature
/// (`#M#C\Foo.bar` returning `#M#C\Baz.qux`, ...). Each hop costs one level.
///
/// ```php
/// // $a->b()->c()->d()->logger()->errorf(...)
/// ```
pub const MAX_TYPE_RESOLUTION_DEPTH: u32 = 32;

/// Maximum nesting when following constant/field references to a literal.
///
/// Each class constant, global constant, declaration, or wrapper node
/// entered costs one level.
///
/// ```php
/// class A { const X = B::Y; }
/// class B { const Y = C::Z; }
/// class C { const Z = "%d items"; }
/// ```
pub const MAX_CONSTANT_RESOLUTION_DEPTH: u32 = 64;

/// Total enter attempts a single resolver may make before giving up.
pub const MAX_RESOLUTION_ITERATIONS: u32 = 10_000;

/// Maximum number of `extends` hops walked for inherited member lookup.
///
/// ```php
/// class Base { const FMT = "%s"; }
/// class Child extends Base {}
/// // Child::FMT resolves through one hop.
/// ```
pub const MAX_INHERITANCE_DEPTH: u32 = 64;
