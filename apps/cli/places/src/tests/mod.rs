mod logger;
mod validation;
