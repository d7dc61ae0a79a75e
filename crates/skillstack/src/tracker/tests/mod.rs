mod common;
mod recommend;
mod routing;
mod summarize;
