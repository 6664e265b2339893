//! Cifras del panel, calculadas a partir de las listas del backend

use contracts::domain::a002_appointment::aggregate::{Appointment, AppointmentStatus};

/// How many upcoming appointments the panel lists
pub const UPCOMING_LIMIT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverviewSummary {
    pub patients: usize,
    pub today: usize,
    pub pending: usize,
    /// `None` when the plan has no prescriptions module
    pub prescriptions: Option<usize>,
    pub upcoming: Vec<Appointment>,
}

impl OverviewSummary {
    /// `today` is `YYYY-MM-DD`; cancelled and completed appointments are not upcoming
    pub fn build(
        patients: usize,
        appointments: &[Appointment],
        prescriptions: Option<usize>,
        today: &str,
    ) -> Self {
        let active = |a: &&Appointment| {
            matches!(
                a.estado,
                AppointmentStatus::Pendiente | AppointmentStatus::Confirmado
            )
        };

        let mut upcoming: Vec<Appointment> = appointments
            .iter()
            .filter(active)
            .filter(|a| a.fecha.as_str() >= today)
            .cloned()
            .collect();
        upcoming.sort_by(|a, b| (&a.fecha, &a.hora).cmp(&(&b.fecha, &b.hora)));
        upcoming.truncate(UPCOMING_LIMIT);

        Self {
            patients,
            today: appointments
                .iter()
                .filter(active)
                .filter(|a| a.fecha == today)
                .count(),
            pending: appointments
                .iter()
                .filter(|a| a.estado == AppointmentStatus::Pendiente)
                .count(),
            prescriptions,
            upcoming,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::RecordId;

    fn appt(id: i64, fecha: &str, hora: &str, estado: AppointmentStatus) -> Appointment {
        Appointment {
            id: RecordId::Number(id),
            paciente: format!("Paciente {id}"),
            fecha: fecha.into(),
            hora: hora.into(),
            motivo: "Control".into(),
            estado,
        }
    }

    #[test]
    fn test_summary_counts() {
        let list = vec![
            appt(1, "2024-06-10", "09:00", AppointmentStatus::Pendiente),
            appt(2, "2024-06-10", "08:00", AppointmentStatus::Confirmado),
            appt(3, "2024-06-10", "10:00", AppointmentStatus::Cancelado),
            appt(4, "2024-06-09", "10:00", AppointmentStatus::Pendiente),
            appt(5, "2024-06-12", "07:30", AppointmentStatus::Pendiente),
        ];
        let s = OverviewSummary::build(12, &list, None, "2024-06-10");
        assert_eq!(s.patients, 12);
        assert_eq!(s.today, 2);
        assert_eq!(s.pending, 3);
        assert_eq!(s.prescriptions, None);
        let order: Vec<_> = s.upcoming.iter().map(|a| a.id.as_string()).collect();
        assert_eq!(order, ["2", "1", "5"]);
    }

    #[test]
    fn test_upcoming_is_capped() {
        let list: Vec<_> = (0..8)
            .map(|i| appt(i, "2030-01-01", &format!("0{i}:00"), AppointmentStatus::Confirmado))
            .collect();
        let s = OverviewSummary::build(0, &list, Some(3), "2024-01-01");
        assert_eq!(s.upcoming.len(), UPCOMING_LIMIT);
        assert_eq!(s.prescriptions, Some(3));
    }
}
