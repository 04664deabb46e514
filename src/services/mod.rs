pub mod abonnements;
pub mod adherents;
pub mod associations;
pub mod cascade;
pub mod coaches;
pub mod groupes;
pub mod locations;
pub mod payments;
pub mod presences;
pub mod reservations;
pub mod schools;
