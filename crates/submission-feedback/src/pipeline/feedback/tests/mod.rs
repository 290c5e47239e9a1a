mod areas;
mod common;
mod strengths;
