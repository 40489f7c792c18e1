mod encoder;
mod fake_transport;
mod generator;
