pub mod abonnements;
pub mod adherents;
pub mod coaches;
pub mod groupes;
pub mod health;
pub mod locations;
pub mod presences;
pub mod reservations;
pub mod schools;
