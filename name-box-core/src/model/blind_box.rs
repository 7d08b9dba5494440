use rand::Rng;

use super::combination::CombinationGenerator;
use super::element::Combination;

/// Lifecycle of an offline blind box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoxState {
	/// Nothing drawn yet.
	Closed,
	/// A combination has been drawn but is still hidden.
	Shaken,
	/// The combination is revealed.
	Opened,
}

/// Offline blind box: shake to draw a combination, open to reveal it.
///
/// # Invariants
/// - `combination` is `Some` exactly when the state is `Shaken` or `Opened`
#[derive(Clone, Debug)]
pub struct BlindBoxSession {
	state: BoxState,
	combination: Option<Combination>,
}

impl Default for BlindBoxSession {
	fn default() -> Self {
		Self { state: BoxState::Closed, combination: None }
	}
}

impl BlindBoxSession {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn state(&self) -> BoxState {
		self.state
	}

	/// The drawn combination, only once the box is open.
	pub fn revealed(&self) -> Option<&Combination> {
		match self.state {
			BoxState::Opened => self.combination.as_ref(),
			_ => None,
		}
	}

	/// Draws a new combination. Shaking again replaces the hidden one.
	///
	/// # Errors
	/// Returns an error if the box is already open.
	pub fn shake<R: Rng + ?Sized>(
		&mut self,
		generator: &CombinationGenerator,
		rng: &mut R,
	) -> Result<&Combination, String> {
		if self.state == BoxState::Opened {
			return Err("The box is already open, reset it first".to_owned());
		}
		self.state = BoxState::Shaken;
		Ok(self.combination.insert(generator.generate(rng)))
	}

	/// Reveals the drawn combination.
	///
	/// # Errors
	/// Returns an error if the box was not shaken or is already open.
	pub fn open(&mut self) -> Result<&Combination, String> {
		if self.state != BoxState::Shaken {
			return Err(format!("Cannot open a box in state {:?}", self.state));
		}
		let combination = self
			.combination
			.as_ref()
			.ok_or_else(|| "Shaken box without a combination".to_owned())?;
		self.state = BoxState::Opened;
		Ok(combination)
	}

	/// Returns to `Closed` and forgets the combination.
	pub fn reset(&mut self) {
		self.state = BoxState::Closed;
		self.combination = None;
	}
}
