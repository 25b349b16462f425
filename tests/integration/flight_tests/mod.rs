mod control;
mod environment;
mod forces;
mod navigation;
