pub mod rom_service;
