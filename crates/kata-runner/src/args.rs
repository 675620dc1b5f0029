//! Argument tuples and the callables that accept them
//!
//! A case's inputs are an ordered tuple. [`Args`] renders that tuple for the
//! report and [`Callable`] spreads it into positional arguments, so any
//! function or closure of arity 0 through 8 can be put under test.

use std::fmt::Debug;

/// An ordered tuple of positional arguments
pub trait Args {
    /// Number of positional arguments
    const ARITY: usize;

    /// Render every argument with `{:?}`, in order
    fn render(&self) -> Vec<String>;

    /// Format the input line of a case report.
    ///
    /// A single argument prints bare (`Input: 5`); any other arity prints as
    /// a tuple (`Inputs: (2, 3)`).
    fn describe(&self) -> String {
        let parts = self.render();
        if parts.len() == 1 {
            format!("Input: {}", parts[0])
        } else {
            format!("Inputs: ({})", parts.join(", "))
        }
    }
}

/// A function that can be invoked with the argument tuple `A`
pub trait Callable<A, O> {
    /// Spread `args` into positional arguments and call
    fn invoke(&mut self, args: A) -> O;
}

impl Args for () {
    const ARITY: usize = 0;

    fn render(&self) -> Vec<String> {
        Vec::new()
    }
}

impl<Func, Out> Callable<(), Out> for Func
where
    Func: FnMut() -> Out,
{
    fn invoke(&mut self, _args: ()) -> Out {
        (self)()
    }
}

macro_rules! impl_args {
    ($arity:expr; $($name:ident),+) => {
        impl<$($name: Debug),+> Args for ($($name,)+) {
            const ARITY: usize = $arity;

            #[allow(non_snake_case)]
            fn render(&self) -> Vec<String> {
                let ($($name,)+) = self;
                vec![$(format!("{:?}", $name)),+]
            }
        }

        impl<Func, Out, $($name),+> Callable<($($name,)+), Out> for Func
        where
            Func: FnMut($($name),+) -> Out,
        {
            #[allow(non_snake_case)]
            fn invoke(&mut self, args: ($($name,)+)) -> Out {
                let ($($name,)+) = args;
                (self)($($name),+)
            }
        }
    };
}

impl_args!(1; A);
impl_args!(2; A, B);
impl_args!(3; A, B, C);
impl_args!(4; A, B, C, D);
impl_args!(5; A, B, C, D, E);
impl_args!(6; A, B, C, D, E, F);
impl_args!(7; A, B, C, D, E, F, G);
impl_args!(8; A, B, C, D, E, F, G, H);

#[cfg(test)]
mod tests {
    use super::*;

    fn call<A, O>(mut f: impl Callable<A, O>, args: A) -> O {
        f.invoke(args)
    }

    #[test]
    fn test_single_argument_prints_bare() {
        assert_eq!((5,).describe(), "Input: 5");
        assert_eq!((vec![1, 2],).describe(), "Input: [1, 2]");
    }

    #[test]
    fn test_multiple_arguments_print_as_tuple() {
        assert_eq!((2, 3).describe(), "Inputs: (2, 3)");
        assert_eq!(("ab", 'c', true).describe(), r#"Inputs: ("ab", 'c', true)"#);
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(().describe(), "Inputs: ()");
        assert_eq!(<() as Args>::ARITY, 0);
    }

    #[test]
    fn test_arity() {
        assert_eq!(<(i32,) as Args>::ARITY, 1);
        assert_eq!(<(u8, u8, u8, u8, u8, u8, u8, u8) as Args>::ARITY, 8);
    }

    #[test]
    fn test_invoke_spreads_tuple() {
        assert_eq!(call(|| 7, ()), 7);
        assert_eq!(call(|x: i32| x * 2, (21,)), 42);
        assert_eq!(call(|a: i32, b: i32, c: i32| a * b - c, (3, 4, 2)), 10);
    }

    #[test]
    fn test_invoke_function_item() {
        fn concat(a: &str, b: &str) -> String {
            format!("{}{}", a, b)
        }
        assert_eq!(call(concat, ("foo", "bar")), "foobar");
    }

    #[test]
    fn test_invoke_mutating_closure() {
        let mut calls = 0;
        let mut counter = |step: i32| {
            calls += step;
            calls
        };
        assert_eq!(counter.invoke((2,)), 2);
        assert_eq!(counter.invoke((3,)), 5);
    }
}
