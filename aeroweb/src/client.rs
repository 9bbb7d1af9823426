// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The client of the data service.

use std::fmt;
use std::sync::Arc;

use aeroweb_xml::Element;
use log::{debug, trace, warn};
use url::Url;

use crate::adapter::{to_flat_list, to_grouped, to_stations, Adapted, GroupedBulletin, Station};
use crate::catalog::ChartCatalog;
use crate::error::Error;
use crate::normalize::normalize;
use crate::request::{DataType, Params, DESTINATION, WEATHER_CODE};
use crate::transport::Transport;
use crate::value::Value;

/// Address of the data service.
pub const BASE_URL: &str = "https://aviation.meteo.fr";
/// Path of the data service relative to [`BASE_URL`].
pub const PATH: &str = "FR/aviation/serveur_donnees.jsp";

/// Field of a response reporting that no data is available.
const NO_DATA_MARKER: &str = "ERREUR";
/// Field of a response reporting that the access was denied.
const ACCESS_MARKER: &str = "acces";
const ACCESS_CODE: &str = "code";

/// Rewrites the request URL before it is sent, e.g. to go through a proxy.
pub type RequestHook = Arc<dyn Fn(Url) -> Url + Send + Sync>;

/// Parses a response body into the generic XML tree.
pub type ParseFn = Arc<dyn Fn(&str) -> Result<Element, aeroweb_xml::Error> + Send + Sync>;

/// Client of the Aeroweb data service.
///
/// Every operation sends one request and returns the normalized response in
/// the shape of its data type. The client holds no state besides its
/// configuration and can be shared between tasks.
///
/// # Examples
///
/// ```no_run
/// # async fn run() -> Result<(), aeroweb::Error> {
/// use aeroweb::Aeroweb;
///
/// let client = Aeroweb::new("my-login")?;
///
/// for station in client.opmet(&["LFPG", "LFPO"]).await? {
///     println!("{} ({}): {} message(s)", station.nom, station.oaci, station.messages.len());
/// }
///
/// if client.validation("TEMPO").await? {
///     println!("valid weather code");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Aeroweb {
    base_url: Url,
    endpoint: Url,
    login: String,
    request_hook: Option<RequestHook>,
    parser: Option<ParseFn>,
    transport: Arc<dyn Transport>,
}

/// The outcome of a request after the soft failures were checked.
enum Response {
    Data(Value),
    /// The service reported that there is no data for the request.
    Empty,
}

impl Aeroweb {
    /// Creates a client of the public service with the given login.
    pub fn new(login: impl Into<String>) -> Result<Self, Error> {
        AerowebBuilder::new(login).build()
    }

    /// Returns a builder to configure the client.
    pub fn builder(login: impl Into<String>) -> AerowebBuilder {
        AerowebBuilder::new(login)
    }

    /// Returns the METAR, SPECI and TAF of the aerodromes `codes`.
    pub async fn opmet(&self, codes: &[&str]) -> Result<Vec<Station>, Error> {
        self.stations(DataType::Opmet, codes, "opmet").await
    }

    /// Returns the SIGMET, AIRMET and GAMET of the FIRs `codes`.
    pub async fn sigmet(&self, codes: &[&str]) -> Result<Vec<Station>, Error> {
        self.stations(DataType::Sigmet, codes, "FIR").await
    }

    /// Returns the volcanic ash advisories of the centres `codes`.
    pub async fn vaa(&self, codes: &[&str]) -> Result<Adapted<Vec<GroupedBulletin>>, Error> {
        self.grouped(DataType::Vaa, codes).await
    }

    /// Returns the volcanic ash advisory graphics of the centres `codes`.
    pub async fn vag(&self, codes: &[&str]) -> Result<Adapted<Vec<Value>>, Error> {
        self.flat_list(DataType::Vag, Params::locations(codes)).await
    }

    /// Returns the tropical cyclone advisories of the centres `codes`.
    pub async fn tca(&self, codes: &[&str]) -> Result<Adapted<Vec<GroupedBulletin>>, Error> {
        self.grouped(DataType::Tca, codes).await
    }

    /// Returns the tropical cyclone advisory graphics of the centres `codes`.
    pub async fn tcag(&self, codes: &[&str]) -> Result<Adapted<Vec<Value>>, Error> {
        self.flat_list(DataType::Tcag, Params::locations(codes)).await
    }

    /// Returns the aerodrome warnings of `codes`.
    pub async fn maa(&self, codes: &[&str]) -> Result<Value, Error> {
        self.value(DataType::Maa, Params::locations(codes)).await
    }

    /// Returns the pre-flight briefings of `codes`.
    pub async fn predec(&self, codes: &[&str]) -> Result<Value, Error> {
        self.value(DataType::Predec, Params::locations(codes)).await
    }

    /// Returns the charts matching the filters.
    ///
    /// Without any filter, the charts of the full chart base are returned.
    pub async fn cartes(
        &self,
        zone: Option<&str>,
        chart_type: Option<&str>,
        altitude: Option<u16>,
    ) -> Result<Adapted<Vec<Value>>, Error> {
        let params = Params::charts(zone, chart_type, altitude);
        self.flat_list(DataType::Cartes, params).await
    }

    /// Returns the flight briefing dossier to `destination`.
    pub async fn dossier(&self, destination: &str) -> Result<Value, Error> {
        let params = Params::new().with(DESTINATION, destination);
        self.value(DataType::Dossier, params).await
    }

    /// Returns the significant weather bulletin.
    pub async fn sw(&self) -> Result<Value, Error> {
        self.value(DataType::Sw, Params::new()).await
    }

    /// Checks the syntax of the weather code `code` (e.g. `"TEMPO"`).
    pub async fn validation(&self, code: &str) -> Result<bool, Error> {
        let params = Params::new().with(WEATHER_CODE, code);

        match self.fetch(DataType::Validation, &params).await? {
            Response::Data(value) => {
                let resultat = value.pointer(&["validation", "resultat"]);
                debug!("validation of {code:?}: {resultat:?}");
                Ok(resultat.and_then(Value::as_str) == Some("OK"))
            }
            Response::Empty => Ok(false),
        }
    }

    /// Returns the zones, chart types and levels of the full chart base.
    pub async fn chart_catalog(&self) -> Result<ChartCatalog, Error> {
        let params = Params::charts(None, None, None);

        match self.fetch(DataType::Cartes, &params).await? {
            Response::Data(value) => Ok(ChartCatalog::from(&value)),
            Response::Empty => Ok(ChartCatalog::default()),
        }
    }

    /// Sends a request and returns the normalized response as is.
    ///
    /// A response without data is returned as an empty map.
    pub async fn request(&self, data_type: DataType, params: Params) -> Result<Value, Error> {
        self.value(data_type, params).await
    }

    /// Returns the URL of a request including its query.
    ///
    /// ```
    /// # use aeroweb::{request::{DataType, Params}, Aeroweb};
    /// let client = Aeroweb::builder("secret")
    ///     .request_hook(|url| url)
    ///     .build()?;
    /// let url = client.url(DataType::Opmet, &Params::locations(&["LFPG", "LFPO"]));
    ///
    /// assert_eq!(
    ///     url.as_str(),
    ///     "https://aviation.meteo.fr/FR/aviation/serveur_donnees.jsp?ID=secret&TYPE_DONNEES=OPMET2&LIEUID=LFPG%7CLFPO"
    /// );
    /// # Ok::<(), aeroweb::Error>(())
    /// ```
    pub fn url(&self, data_type: DataType, params: &Params) -> Url {
        let mut url = self.endpoint.clone();

        url.query_pairs_mut()
            .clear()
            .append_pair(crate::request::LOGIN, &self.login)
            .append_pair(crate::request::DATA_TYPE, data_type.as_str())
            .extend_pairs(params.iter());

        match &self.request_hook {
            Some(hook) => hook(url),
            None => url,
        }
    }

    async fn stations(
        &self,
        data_type: DataType,
        codes: &[&str],
        field: &str,
    ) -> Result<Vec<Station>, Error> {
        let stations = match self.fetch(data_type, &Params::locations(codes)).await? {
            Response::Data(value) => value
                .pointer(&["root", field])
                .map(to_stations)
                .unwrap_or_default(),
            Response::Empty => Vec::new(),
        };

        debug!("{data_type}: {} station(s)", stations.len());
        Ok(stations)
    }

    async fn grouped(
        &self,
        data_type: DataType,
        codes: &[&str],
    ) -> Result<Adapted<Vec<GroupedBulletin>>, Error> {
        match self.fetch(data_type, &Params::locations(codes)).await? {
            Response::Data(value) => Ok(to_grouped(value)),
            Response::Empty => Ok(Adapted::default()),
        }
    }

    async fn flat_list(
        &self,
        data_type: DataType,
        params: Params,
    ) -> Result<Adapted<Vec<Value>>, Error> {
        match self.fetch(data_type, &params).await? {
            Response::Data(value) => Ok(to_flat_list(value)),
            Response::Empty => Ok(Adapted::default()),
        }
    }

    async fn value(&self, data_type: DataType, params: Params) -> Result<Value, Error> {
        match self.fetch(data_type, &params).await? {
            Response::Data(value) => Ok(value),
            Response::Empty => Ok(Value::default()),
        }
    }

    /// Sends the request, normalizes the response and checks the soft
    /// failures reported by the service.
    async fn fetch(&self, data_type: DataType, params: &Params) -> Result<Response, Error> {
        let url = self.url(data_type, params);
        debug!("requesting {data_type}");
        trace!("GET {} {:?}", url.path(), params);

        let body = self.transport.get(url).await?;
        debug!("{data_type}: received {} byte(s)", body.len());

        let document = match &self.parser {
            Some(parse) => parse(&body)?,
            None => aeroweb_xml::parse(&body)?,
        };
        let value = normalize(&document, &self.base_url);

        if value.pointer(&[ACCESS_MARKER, ACCESS_CODE]).is_some() {
            warn!("{data_type}: access denied by the service");
            return Err(Error::Authentication);
        }

        if value.get(NO_DATA_MARKER).is_some() {
            warn!("{data_type}: service reported no data");
            return Ok(Response::Empty);
        }

        Ok(Response::Data(value))
    }
}

impl fmt::Debug for Aeroweb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aeroweb")
            .field("endpoint", &self.endpoint.as_str())
            .field("request_hook", &self.request_hook.is_some())
            .field("parser", &self.parser.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder of an [`Aeroweb`] client.
#[derive(Clone)]
pub struct AerowebBuilder {
    base_url: String,
    path: String,
    login: String,
    request_hook: Option<RequestHook>,
    parser: Option<ParseFn>,
    transport: Option<Arc<dyn Transport>>,
}

impl AerowebBuilder {
    /// Creates a builder for the public service with the given login.
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            path: PATH.to_string(),
            login: login.into(),
            request_hook: None,
            parser: None,
            transport: None,
        }
    }

    /// Sets the address of the service. Links in responses are resolved
    /// against this address.
    pub fn base_url(&mut self, base_url: impl Into<String>) -> &mut Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the path of the service relative to the base URL.
    pub fn path(&mut self, path: impl Into<String>) -> &mut Self {
        self.path = path.into();
        self
    }

    /// Sets a hook that rewrites every request URL before it is sent.
    pub fn request_hook<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn(Url) -> Url + Send + Sync + 'static,
    {
        self.request_hook = Some(Arc::new(hook));
        self
    }

    /// Replaces the XML parser.
    pub fn parser<F>(&mut self, parser: F) -> &mut Self
    where
        F: Fn(&str) -> Result<Element, aeroweb_xml::Error> + Send + Sync + 'static,
    {
        self.parser = Some(Arc::new(parser));
        self
    }

    /// Sets the transport that sends the requests.
    ///
    /// Defaults to an [`HttpTransport`](crate::transport::HttpTransport) if
    /// the `http` feature is enabled.
    pub fn transport<T>(&mut self, transport: T) -> &mut Self
    where
        T: Transport + 'static,
    {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Builds the client.
    ///
    /// Fails with [`Error::InvalidUrl`] if the base URL or the path are not
    /// valid and with [`Error::NoTransport`] if no transport is available.
    pub fn build(&self) -> Result<Aeroweb, Error> {
        let base_url = Url::parse(&self.base_url)?;
        let endpoint = base_url.join(&self.path)?;

        Ok(Aeroweb {
            base_url,
            endpoint,
            login: self.login.clone(),
            request_hook: self.request_hook.clone(),
            parser: self.parser.clone(),
            transport: self.default_transport()?,
        })
    }

    #[cfg(feature = "http")]
    fn default_transport(&self) -> Result<Arc<dyn Transport>, Error> {
        Ok(self
            .transport
            .clone()
            .unwrap_or_else(|| Arc::new(crate::transport::HttpTransport::new())))
    }

    #[cfg(not(feature = "http"))]
    fn default_transport(&self) -> Result<Arc<dyn Transport>, Error> {
        self.transport.clone().ok_or(Error::NoTransport)
    }
}

impl fmt::Debug for AerowebBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AerowebBuilder")
            .field("base_url", &self.base_url)
            .field("path", &self.path)
            .field("request_hook", &self.request_hook.is_some())
            .field("parser", &self.parser.is_some())
            .field("transport", &self.transport.is_some())
            .finish_non_exhaustive()
    }
}
