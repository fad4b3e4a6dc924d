use std::{borrow::Borrow, env, num::NonZero};

use anyhow::{bail, Context as _, Result};

pub trait ReadFromVar: Sized {
    fn parse_var(variable: &str, value: String) -> Result<Self>;

    fn read_from_var<S>(variable: S) -> Result<Self>
    where
        S: Borrow<str>,
    {
        let variable = variable.borrow();

        env::var(variable)
            .with_context(|| {
                format!("Failed to read environment variable {variable:?}!")
            })
            .and_then(|value| Self::parse_var(variable, value))
    }

    fn read_optional_from_var<S>(variable: S) -> Result<Option<Self>>
    where
        S: Borrow<str>,
    {
        let variable = variable.borrow();

        match env::var(variable) {
            Ok(value) => Self::parse_var(variable, value).map(Some),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(error) => Err(error).with_context(|| {
                format!("Failed to read environment variable {variable:?}!")
            }),
        }
    }
}

impl ReadFromVar for String {
    #[inline]
    fn parse_var(_: &str, value: String) -> Result<Self> {
        Ok(value)
    }
}

impl ReadFromVar for bool {
    fn parse_var(variable: &str, value: String) -> Result<Self> {
        const TRUTHY: [&str; 4] = ["1", "y", "Y", "true"];

        const FALSY: [&str; 4] = ["0", "n", "N", "false"];

        if TRUTHY.contains(&value.as_str()) {
            Ok(true)
        } else if FALSY.contains(&value.as_str()) {
            Ok(false)
        } else {
            bail!(
                "Environment variable {variable:?} holds {value:?}, which is \
                neither a truthy nor a falsy value!"
            )
        }
    }
}

macro_rules! impl_for_parseable {
    ($($type: ty),+ $(,)?) => {
        $(
            impl_for_parseable!(@@@ $type);
            impl_for_parseable!(@@@ NonZero<$type>);
        )+
    };
    (@@@ $type:ty) => {
        impl ReadFromVar for $type {
            fn parse_var(variable: &str, value: String) -> Result<Self> {
                value.parse().with_context(|| {
                    format!(
                        "Failed to parse environment variable {variable:?} as \
                        \"{}\"!",
                        ::core::stringify!($type),
                    )
                })
            }
        }
    };
}

impl_for_parseable![u8, u16, u32, u64, usize];
